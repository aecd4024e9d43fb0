use async_trait::async_trait;
use studydesk_core::search::{
    filter_documents_by_type, search_documents, CorpusOperation, CorpusStats, ProviderResult,
};
use studydesk_core::{
    open_db_in_memory, DocumentCorpusProvider, DocumentSearchEngine, InMemoryDocumentProvider,
    LegalDocument, ProviderError, SearchError, SearchOutcome, SqliteDocumentProvider,
};

fn corpus() -> Vec<LegalDocument> {
    vec![
        LegalDocument::new("1", "Constituição Federal", "constituicao", "Dos direitos fundamentais"),
        LegalDocument::new("2", "Lei 8.112/90", "lei", "Regime jurídico dos servidores"),
        LegalDocument::new("3", "Decreto 9.094/17", "decreto", "Simplificação do atendimento"),
        LegalDocument::new("4", "Código Civil", "lei", "Das pessoas naturais"),
        LegalDocument::new("5", "Decreto 7.724/12", "decreto", "Acesso à informação"),
    ]
}

async fn loaded_engine() -> DocumentSearchEngine<InMemoryDocumentProvider> {
    let mut engine = DocumentSearchEngine::new(InMemoryDocumentProvider::new(corpus()));
    engine.load().await.unwrap();
    engine
}

/// Provider whose every call fails, used to check error propagation.
struct UnavailableProvider;

#[async_trait]
impl DocumentCorpusProvider for UnavailableProvider {
    fn provider_id(&self) -> &str {
        "offline"
    }

    async fn list_all(&self) -> ProviderResult<Vec<LegalDocument>> {
        Err(unavailable(CorpusOperation::ListAll))
    }

    async fn search_by_text(&self, _term: &str) -> ProviderResult<Vec<LegalDocument>> {
        Err(unavailable(CorpusOperation::SearchByText))
    }

    async fn filter_by_type(&self, _doc_type: &str) -> ProviderResult<Vec<LegalDocument>> {
        Err(unavailable(CorpusOperation::FilterByType))
    }

    async fn stats(&self) -> ProviderResult<CorpusStats> {
        Err(unavailable(CorpusOperation::Stats))
    }
}

fn unavailable(operation: CorpusOperation) -> ProviderError {
    ProviderError::new("offline", operation, "unavailable", "backend unreachable")
}

#[test]
fn blank_search_returns_full_corpus_in_order() {
    let docs = corpus();
    let found = search_documents(&docs, "   ");
    assert_eq!(found.len(), docs.len());
    assert!(found.iter().zip(docs.iter()).all(|(left, right)| *left == right));
}

#[test]
fn search_is_case_insensitive_on_title_and_content() {
    let docs = corpus();
    let by_title = search_documents(&docs, "DECRETO")
        .into_iter()
        .map(|doc| doc.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(by_title, vec!["3", "5"]);

    let by_content = search_documents(&docs, "INFORMAÇÃO")
        .into_iter()
        .map(|doc| doc.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(by_content, vec!["5"]);
}

#[test]
fn type_filter_is_exact_and_blank_is_identity() {
    let docs = corpus();
    let leis = filter_documents_by_type(&docs, Some("lei"));
    assert_eq!(leis.len(), 2);
    assert!(leis.iter().all(|doc| doc.doc_type == "lei"));

    assert_eq!(filter_documents_by_type(&docs, Some("")).len(), 5);
    assert_eq!(filter_documents_by_type(&docs, None).len(), 5);
    assert!(filter_documents_by_type(&docs, Some("Lei")).is_empty());
}

#[tokio::test]
async fn decreto_filter_is_a_subset_and_empty_search_is_not() {
    let engine = loaded_engine().await;

    let decretos = engine.filter_by_type(Some("decreto")).await.unwrap();
    assert_eq!(decretos.shown, 2);
    assert_eq!(decretos.total, 5);
    assert!(decretos.is_subset);
    assert_eq!(decretos.summary_label().as_deref(), Some("showing 2 of 5"));

    let everything = engine.search("").await.unwrap();
    assert_eq!(everything.shown, 5);
    assert!(!everything.is_subset);
    assert_eq!(everything.summary_label(), None);
    assert_eq!(everything.documents, corpus());
}

#[tokio::test]
async fn stats_group_documents_by_type() {
    let engine = loaded_engine().await;
    let stats = engine.stats().await.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.by_type.get("decreto"), Some(&2));
    assert_eq!(stats.by_type.get("constituicao"), Some(&1));
}

#[tokio::test]
async fn provider_failure_surfaces_as_error_value() {
    let mut engine = DocumentSearchEngine::new(UnavailableProvider);

    let err = engine.load().await.unwrap_err();
    let SearchError::Provider(provider_err) = err;
    assert_eq!(provider_err.code, "unavailable");
    assert_eq!(provider_err.operation, CorpusOperation::ListAll);

    let outcome = SearchOutcome::from(engine.search("lei").await);
    assert!(!outcome.is_success());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "failure");
}

#[tokio::test]
async fn identity_shortcuts_never_call_the_provider() {
    let engine = DocumentSearchEngine::new(UnavailableProvider);

    let everything = engine.search("  ").await.unwrap();
    assert_eq!(everything.shown, 0);
    assert!(!everything.is_subset);

    let unfiltered = engine.filter_by_type(None).await.unwrap();
    assert_eq!(unfiltered.total, 0);
}

#[tokio::test]
async fn search_before_load_never_reports_more_shown_than_total() {
    let engine = DocumentSearchEngine::new(InMemoryDocumentProvider::new(corpus()));

    let decretos = engine.filter_by_type(Some("decreto")).await.unwrap();
    assert_eq!(decretos.shown, 2);
    assert_eq!(decretos.total, 2);
    assert!(!decretos.is_subset);
    assert_eq!(decretos.summary_label(), None);

    let found = engine.search("lei").await.unwrap();
    assert!(found.shown <= found.total);
}

#[tokio::test]
async fn success_envelope_is_tagged() {
    let engine = loaded_engine().await;
    let outcome = SearchOutcome::from(engine.search("civil").await);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["result"]["shown"], 1);
    assert_eq!(json["result"]["isSubset"], true);
}

#[tokio::test]
async fn sqlite_provider_serves_the_same_scenario() {
    let provider = SqliteDocumentProvider::new(open_db_in_memory().unwrap());
    let mut docs = corpus();
    docs[0]
        .metadata
        .insert("ano".to_string(), "1988".to_string());
    assert_eq!(provider.import_documents(&docs).unwrap(), 5);

    let mut engine = DocumentSearchEngine::new(provider);
    let loaded = engine.load().await.unwrap();
    assert_eq!(loaded.shown, 5);
    assert_eq!(engine.corpus()[0].metadata.get("ano").map(String::as_str), Some("1988"));

    let decretos = engine.filter_by_type(Some("decreto")).await.unwrap();
    let ids = decretos
        .documents
        .iter()
        .map(|doc| doc.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["3", "5"]);
    assert!(decretos.is_subset);

    let accented = engine.search("CONSTITUIÇÃO").await.unwrap();
    assert_eq!(accented.shown, 1);

    let stats = engine.stats().await.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.by_type.get("lei"), Some(&2));
}

#[tokio::test]
async fn sqlite_import_replaces_documents_by_id() {
    let provider = SqliteDocumentProvider::new(open_db_in_memory().unwrap());
    provider.import_documents(&corpus()).unwrap();

    let revised = LegalDocument::new("2", "Lei 8.112/90 (atualizada)", "lei", "Texto consolidado");
    provider.import_documents(&[revised]).unwrap();

    let all = provider.list_all().await.unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[1].title, "Lei 8.112/90 (atualizada)");
}
