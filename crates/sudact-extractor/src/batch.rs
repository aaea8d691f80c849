//! Concurrent batch runner
//!
//! Whole-document invocations run on the blocking thread pool, bounded by a
//! semaphore. Results come back in input order.

use crate::error::ExtractorError;
use crate::parser::DocumentParser;
use std::fmt::Display;
use std::sync::Arc;
use sudact_domain::traits::{NameExtractor, SentenceClassifier, SentenceTokenizer};
use sudact_domain::{MetadataRecord, ParsedDocument, RawDocument};
use tokio::sync::Semaphore;

/// Default number of documents parsed at once
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Runs a shared `DocumentParser` over many documents in parallel
///
/// # Examples
///
/// ```
/// use sudact_extractor::{BatchRunner, DocumentParser, ExtractorConfig};
/// use sudact_nlp::{MockClassifier, MockNameExtractor, MockTokenizer};
///
/// # #[tokio::main]
/// # async fn main() {
/// let parser = DocumentParser::new(
///     MockClassifier::default(),
///     MockTokenizer::new(),
///     MockNameExtractor::empty(),
///     ExtractorConfig::default(),
/// )
/// .unwrap();
/// let runner = BatchRunner::new(parser, 2);
/// let results = runner.run(Vec::new()).await;
/// assert!(results.is_empty());
/// # }
/// ```
pub struct BatchRunner<C, T, N> {
    parser: Arc<DocumentParser<C, T, N>>,
    concurrency: usize,
}

impl<C, T, N> BatchRunner<C, T, N>
where
    C: SentenceClassifier + Send + Sync + 'static,
    C::Error: Display,
    T: SentenceTokenizer + Send + Sync + 'static,
    T::Error: Display,
    N: NameExtractor + Send + Sync + 'static,
    N::Error: Display,
{
    /// Create a runner; concurrency below one is raised to one
    pub fn new(parser: DocumentParser<C, T, N>, concurrency: usize) -> Self {
        Self {
            parser: Arc::new(parser),
            concurrency: concurrency.max(1),
        }
    }

    /// Maximum number of documents parsed at once
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Parse every document fully
    pub async fn run(&self, docs: Vec<RawDocument>) -> Vec<Result<ParsedDocument, ExtractorError>> {
        self.run_with(docs, DocumentParser::parse).await
    }

    /// Extract metadata from every document
    pub async fn run_metadata(
        &self,
        docs: Vec<RawDocument>,
    ) -> Vec<Result<MetadataRecord, ExtractorError>> {
        self.run_with(docs, DocumentParser::parse_metadata).await
    }

    async fn run_with<R>(
        &self,
        docs: Vec<RawDocument>,
        job: fn(&DocumentParser<C, T, N>, &RawDocument) -> Result<R, ExtractorError>,
    ) -> Vec<Result<R, ExtractorError>>
    where
        R: Send + 'static,
    {
        tracing::info!(
            "Batch started: {} documents, concurrency {}",
            docs.len(),
            self.concurrency
        );

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let handles: Vec<_> = docs
            .into_iter()
            .map(|doc| {
                let parser = Arc::clone(&self.parser);
                let semaphore = Arc::clone(&semaphore);
                tokio::spawn(async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|e| ExtractorError::Worker(e.to_string()))?;
                    tokio::task::spawn_blocking(move || job(&parser, &doc))
                        .await
                        .map_err(|e| ExtractorError::Worker(e.to_string()))?
                })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(ExtractorError::Worker(e.to_string())),
            };
            if let Err(e) = &result {
                tracing::warn!("Document failed: {}", e);
            }
            results.push(result);
        }

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(
            "Batch finished: {} succeeded, {} failed",
            results.len() - failed,
            failed
        );
        results
    }
}
