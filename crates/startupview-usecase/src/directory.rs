//! Directory - The read flows behind every view
//!
//! ```text
//! view ──▶ Directory ──▶ DocumentStore ──▶ mappers ──▶ entities
//!               │
//!               └─ investor detail: fan out one startup read per
//!                  reference, merge logos back by position
//! ```
//!
//! Nothing here retries. Store failures propagate as [`AppError`]; the
//! view decides what to show and offers a manual retry.

use std::sync::Arc;

use futures::future::join_all;
use startupview_domain::model::fields;
use startupview_domain::{
    map_industry, map_investor, map_startup, Collection, DocumentStore, EqualityFilter, Industry,
    IndustryId, Investor, InvestorId, Startup, StartupId, StartupRef,
};
use tracing::{debug, warn};

use crate::error::AppError;

/// Read-only directory over a document store
pub struct Directory<S> {
    store: Arc<S>,
}

impl<S> Clone for Directory<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> Directory<S>
where
    S: DocumentStore + Send + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Startups, optionally restricted to one industry
    ///
    /// The industry restriction is handed to the store as an equality
    /// filter on `startup_industry_id`. Order is the store's.
    pub async fn list_startups(
        &self,
        industry_id: Option<&IndustryId>,
    ) -> Result<Vec<Startup>, AppError> {
        let filter = industry_id
            .map(|id| EqualityFilter::new(fields::STARTUP_INDUSTRY_ID, id.as_str()));

        let documents = self
            .store
            .list_documents(Collection::Startups, filter.as_ref())
            .await?;

        debug!(
            industry = industry_id.map(IndustryId::as_str),
            count = documents.len(),
            "listed startups"
        );
        Ok(documents.iter().map(map_startup).collect())
    }

    /// One startup; its investor references are returned unresolved
    pub async fn get_startup_detail(&self, id: &StartupId) -> Result<Startup, AppError> {
        let document = self
            .store
            .get_document(Collection::Startups, id.as_str())
            .await?
            .ok_or_else(|| AppError::not_found("Startup"))?;

        Ok(map_startup(&document))
    }

    /// All investors with their (unenriched) startup references
    pub async fn list_investors(&self) -> Result<Vec<Investor>, AppError> {
        let documents = self
            .store
            .list_documents(Collection::Investors, None)
            .await?;

        debug!(count = documents.len(), "listed investors");
        Ok(documents.iter().map(map_investor).collect())
    }

    /// One investor, with the logo of every backed startup that resolves
    ///
    /// Startup reads run concurrently. A reference whose startup is missing
    /// or fails to load keeps its id and name and gets no logo; only a
    /// missing or unreadable investor fails the whole call.
    pub async fn get_investor_detail(&self, id: &InvestorId) -> Result<Investor, AppError> {
        let document = self
            .store
            .get_document(Collection::Investors, id.as_str())
            .await?
            .ok_or_else(|| AppError::not_found("Investor"))?;

        let mut investor = map_investor(&document);

        // join_all yields results in input order, so each slot stays put
        let enriched = join_all(
            investor
                .startups()
                .iter()
                .cloned()
                .map(|reference| self.enrich(reference)),
        )
        .await;

        debug!(
            investor = %investor.id(),
            references = enriched.len(),
            with_logo = enriched.iter().filter(|s| s.logo_url.is_some()).count(),
            "assembled investor detail"
        );

        investor.set_startups(enriched);
        Ok(investor)
    }

    /// All industries with their startup counts
    pub async fn list_industries(&self) -> Result<Vec<Industry>, AppError> {
        let documents = self
            .store
            .list_documents(Collection::Industries, None)
            .await?;

        Ok(documents.iter().map(map_industry).collect())
    }

    async fn enrich(&self, reference: StartupRef) -> StartupRef {
        let fetched = self
            .store
            .get_document(Collection::Startups, reference.id.as_str())
            .await;

        match fetched {
            Ok(Some(document)) => match document.get_str(fields::STARTUP_LOGO) {
                Some(logo) => reference.with_logo_url(logo),
                None => reference,
            },
            Ok(None) => {
                warn!(startup = %reference.id, "referenced startup does not exist");
                reference
            }
            Err(error) => {
                warn!(startup = %reference.id, %error, "failed to fetch referenced startup");
                reference
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedStore;
    use startupview_domain::{Document, FieldValue, StoreError};

    fn startup_doc(id: &str, name: &str, industry_id: &str) -> Document {
        Document::new(id)
            .with_field(fields::STARTUP_NAME, name)
            .with_field(fields::STARTUP_DESCRIPTION, format!("{} description", name))
            .with_field(fields::STARTUP_LOGO, format!("https://cdn/{}.png", id))
            .with_field(fields::STARTUP_WEBSITE, format!("https://{}.example", id))
            .with_field(fields::STARTUP_INDUSTRY, "Industry")
            .with_field(fields::STARTUP_INDUSTRY_ID, industry_id)
            .with_field(fields::STARTUP_COUNTRY, "SA")
            .with_field(
                fields::STARTUP_INVESTORS,
                vec![FieldValue::map([("id", "v1"), ("name", "Seed Fund")])],
            )
    }

    fn investor_doc(id: &str, refs: &[(&str, &str)]) -> Document {
        Document::new(id)
            .with_field(fields::INVESTOR_NAME, "Seed Fund")
            .with_field(
                fields::INVESTOR_STARTUPS,
                refs.iter()
                    .map(|(id, name)| FieldValue::map([("id", *id), ("name", *name)]))
                    .collect::<Vec<_>>(),
            )
    }

    fn directory<S: DocumentStore + Send + Sync>(store: S) -> Directory<S> {
        Directory::new(Arc::new(store))
    }

    // ============== Startup Listing ==============

    #[tokio::test]
    async fn test_list_startups_by_industry() {
        let dir = directory(
            ScriptedStore::new()
                .with(Collection::Startups, startup_doc("s1", "A", "ind-42"))
                .with(Collection::Startups, startup_doc("s2", "B", "ind-7"))
                .with(Collection::Startups, startup_doc("s3", "C", "ind-42"))
                .with(Collection::Startups, startup_doc("s4", "D", "ind-7"))
                .with(Collection::Startups, startup_doc("s5", "E", "ind-42")),
        );

        let startups = dir
            .list_startups(Some(&IndustryId::new("ind-42")))
            .await
            .unwrap();

        // Order is implementation-defined; compare as a set
        let mut ids: Vec<&str> = startups.iter().map(|s| s.id().as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["s1", "s3", "s5"]);

        for startup in &startups {
            assert_eq!(startup.industry_id().map(IndustryId::as_str), Some("ind-42"));
            assert!(!startup.name().is_empty());
            assert!(!startup.description().is_empty());
            assert!(startup.logo_url().is_some());
            assert!(startup.website_url().is_some());
            assert_eq!(startup.country(), Some("SA"));
            assert_eq!(startup.industry(), Some("Industry"));
            assert_eq!(startup.investors().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_industry_filter_is_passed_to_store() {
        let dir = directory(ScriptedStore::new());

        dir.list_startups(Some(&IndustryId::new("ind-42"))).await.unwrap();
        dir.list_startups(None).await.unwrap();

        let calls = dir.store().list_calls();
        assert_eq!(
            calls,
            vec![
                (
                    Collection::Startups,
                    Some(EqualityFilter::new("startup_industry_id", "ind-42"))
                ),
                (Collection::Startups, None),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_startups_without_filter_returns_all() {
        let dir = directory(
            ScriptedStore::new()
                .with(Collection::Startups, startup_doc("s1", "A", "ind-1"))
                .with(Collection::Startups, startup_doc("s2", "B", "ind-2")),
        );

        let startups = dir.list_startups(None).await.unwrap();
        assert_eq!(startups.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_industry_lists_nothing() {
        let dir = directory(
            ScriptedStore::new().with(Collection::Startups, startup_doc("s1", "A", "ind-1")),
        );

        let startups = dir
            .list_startups(Some(&IndustryId::new("no-such-industry")))
            .await
            .unwrap();
        assert!(startups.is_empty());
    }

    #[tokio::test]
    async fn test_list_startups_propagates_store_error() {
        let dir = directory(ScriptedStore::new().failing_collection(Collection::Startups));

        let err = dir.list_startups(None).await.unwrap_err();
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    // ============== Investor Detail ==============

    #[tokio::test]
    async fn test_investor_detail_partial_enrichment() {
        let dir = directory(
            ScriptedStore::new()
                .with(
                    Collection::Investors,
                    investor_doc("v1", &[("s1", "Acme"), ("s2", "Ghost")]),
                )
                .with(
                    Collection::Startups,
                    Document::new("s1").with_field(fields::STARTUP_LOGO, "L"),
                ),
        );

        let investor = dir
            .get_investor_detail(&InvestorId::new("v1"))
            .await
            .unwrap();

        assert_eq!(
            investor.startups(),
            &[
                StartupRef::new("s1", "Acme").with_logo_url("L"),
                StartupRef::new("s2", "Ghost"),
            ]
        );
    }

    #[tokio::test]
    async fn test_investor_detail_keeps_order_and_tolerates_failures() {
        let dir = directory(
            ScriptedStore::new()
                .with(
                    Collection::Investors,
                    investor_doc("v1", &[("s3", "C"), ("s1", "A"), ("s2", "B"), ("s4", "D")]),
                )
                .with(Collection::Startups, startup_doc("s1", "A", "ind-1"))
                .with(Collection::Startups, startup_doc("s2", "B", "ind-1"))
                .with(Collection::Startups, startup_doc("s3", "C", "ind-1"))
                .failing_document(Collection::Startups, "s2"),
        );

        let investor = dir
            .get_investor_detail(&InvestorId::new("v1"))
            .await
            .unwrap();

        let slots: Vec<(&str, Option<&str>)> = investor
            .startups()
            .iter()
            .map(|s| (s.id.as_str(), s.logo_url.as_deref()))
            .collect();
        assert_eq!(
            slots,
            vec![
                ("s3", Some("https://cdn/s3.png")),
                ("s1", Some("https://cdn/s1.png")),
                ("s2", None),
                ("s4", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_investor_detail_without_startups() {
        let dir = directory(ScriptedStore::new().with(Collection::Investors, investor_doc("v1", &[])));

        let investor = dir
            .get_investor_detail(&InvestorId::new("v1"))
            .await
            .unwrap();
        assert!(investor.startups().is_empty());
    }

    #[tokio::test]
    async fn test_investor_detail_not_found() {
        let dir = directory(ScriptedStore::new());

        let err = dir
            .get_investor_detail(&InvestorId::new("missing"))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::not_found("Investor"));
    }

    #[tokio::test]
    async fn test_investor_detail_fails_when_investor_read_fails() {
        let dir = directory(ScriptedStore::new().failing_collection(Collection::Investors));

        let err = dir
            .get_investor_detail(&InvestorId::new("v1"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_investor_detail_survives_startup_collection_outage() {
        let dir = directory(
            ScriptedStore::new()
                .with(Collection::Investors, investor_doc("v1", &[("s1", "Acme")]))
                .failing_collection(Collection::Startups),
        );

        let investor = dir
            .get_investor_detail(&InvestorId::new("v1"))
            .await
            .unwrap();
        assert_eq!(investor.startups(), &[StartupRef::new("s1", "Acme")]);
    }

    /// Startup reads block until `barrier` has as many waiters as it was
    /// sized for, so they only finish when issued together
    struct GatedStore {
        investor: Document,
        barrier: tokio::sync::Barrier,
    }

    impl DocumentStore for GatedStore {
        async fn get_document(
            &self,
            collection: Collection,
            id: &str,
        ) -> Result<Option<Document>, StoreError> {
            match collection {
                Collection::Investors => Ok(Some(self.investor.clone())),
                _ => {
                    self.barrier.wait().await;
                    Ok(Some(
                        Document::new(id).with_field(fields::STARTUP_LOGO, format!("logo-{}", id)),
                    ))
                }
            }
        }

        async fn list_documents(
            &self,
            _collection: Collection,
            _filter: Option<&EqualityFilter>,
        ) -> Result<Vec<Document>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_investor_detail_reads_startups_concurrently() {
        let refs = [("s1", "A"), ("s2", "B"), ("s3", "C"), ("s4", "D")];
        let dir = directory(GatedStore {
            investor: investor_doc("v1", &refs),
            barrier: tokio::sync::Barrier::new(refs.len()),
        });

        // One read at a time would never get past the barrier
        let investor = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            dir.get_investor_detail(&InvestorId::new("v1")),
        )
        .await
        .expect("startup reads were not issued together")
        .unwrap();

        let logos: Vec<Option<&str>> = investor
            .startups()
            .iter()
            .map(|s| s.logo_url.as_deref())
            .collect();
        assert_eq!(
            logos,
            vec![Some("logo-s1"), Some("logo-s2"), Some("logo-s3"), Some("logo-s4")]
        );
    }

    // ============== Other Reads ==============

    #[tokio::test]
    async fn test_startup_detail() {
        let dir = directory(
            ScriptedStore::new().with(Collection::Startups, startup_doc("s1", "Acme", "ind-1")),
        );

        let startup = dir.get_startup_detail(&StartupId::new("s1")).await.unwrap();
        assert_eq!(startup.name(), "Acme");
        assert_eq!(startup.investors()[0].id.as_str(), "v1");

        let err = dir
            .get_startup_detail(&StartupId::new("s9"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Startup not found");
    }

    #[tokio::test]
    async fn test_list_investors_and_industries() {
        let dir = directory(
            ScriptedStore::new()
                .with(Collection::Investors, investor_doc("v1", &[("s1", "A"), ("s2", "B")]))
                .with(
                    Collection::Industries,
                    Document::new("ind-1")
                        .with_field(fields::INDUSTRY_NAME, "Fintech")
                        .with_field(fields::INDUSTRY_COUNT, 2i64),
                ),
        );

        let investors = dir.list_investors().await.unwrap();
        assert_eq!(investors.len(), 1);
        assert_eq!(investors[0].investment_count(), 2);
        assert!(investors[0].startups().iter().all(|s| s.logo_url.is_none()));

        let industries = dir.list_industries().await.unwrap();
        assert_eq!(industries, vec![Industry::new(IndustryId::new("ind-1"), "Fintech", 2)]);
    }
}
