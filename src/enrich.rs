//! Enrichment orchestrator: the correction → definition loop.
//!
//! Drives each input record through the two model stages, classifies the
//! outcome into exactly one of the two output tables, and paces calls to
//! respect external rate limits. Per-record failures are classified and
//! accumulated, never propagated: the batch always runs to completion.

use std::time::Duration;

use tokio::time::sleep;

use crate::corrector::{Correction, UNKNOWN_TERM_SENTINEL, correct_term};
use crate::definer::define_term;
use crate::gemini::TextGenerator;
use crate::record::{ReviewRecord, SuccessRecord, TermRecord};
use crate::ui::BatchProgress;

/// Accumulated output of one enrichment run.
///
/// The two collections partition the processed input: every record lands
/// in exactly one of them, in input order.
#[derive(Debug, Default)]
pub struct EnrichmentOutcome {
    pub successes: Vec<SuccessRecord>,
    pub review: Vec<ReviewRecord>,
}

/// How one record resolved. Internal to the loop; the variants map
/// one-to-one onto the two output tables.
enum RecordOutcome {
    Success(SuccessRecord),
    Review(ReviewRecord),
}

/// Drives term records through correction, definition and classification.
pub struct Enricher<'a, G> {
    client: &'a G,
    /// Courtesy pause between records, not a correctness mechanism.
    pace: Duration,
}

impl<'a, G: TextGenerator> Enricher<'a, G> {
    pub fn new(client: &'a G, pace: Duration) -> Self {
        Self { client, pace }
    }

    /// Process all records sequentially, in input order.
    ///
    /// The pacing delay applies uniformly after every record regardless of
    /// how it resolved; the last record skips the trailing sleep.
    pub async fn run(
        &self,
        records: &[TermRecord],
        progress: &BatchProgress,
    ) -> EnrichmentOutcome {
        let total = records.len();
        let mut outcome = EnrichmentOutcome::default();

        for (index, record) in records.iter().enumerate() {
            progress.record_started(index, total, &record.raw_term);

            match self.process_record(record).await {
                RecordOutcome::Success(row) => {
                    progress.routed_success(&row.corrected_term);
                    outcome.successes.push(row);
                }
                RecordOutcome::Review(row) => {
                    progress.routed_review(&row);
                    outcome.review.push(row);
                }
            }

            if index + 1 < total {
                sleep(self.pace).await;
            }
        }

        outcome
    }

    /// Correct then define one record. Always resolves to exactly one
    /// outcome; an unrecognized term never reaches the definition stage.
    async fn process_record(&self, record: &TermRecord) -> RecordOutcome {
        let corrected = match correct_term(self.client, &record.raw_term).await {
            Ok(Correction::Corrected(term)) => term,
            Ok(Correction::Unrecognized) => {
                return RecordOutcome::Review(ReviewRecord::not_recognized(
                    record,
                    UNKNOWN_TERM_SENTINEL,
                ));
            }
            Err(err) => {
                return RecordOutcome::Review(ReviewRecord::call_failed(record, err.to_string()));
            }
        };

        match define_term(self.client, &corrected, &record.label).await {
            Ok(definition) => RecordOutcome::Success(SuccessRecord {
                corrected_term: corrected,
                definition,
                label: record.label.clone(),
            }),
            Err(err) => RecordOutcome::Review(ReviewRecord::call_failed(record, err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GeminiError;
    use crate::record::ReviewReason;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays a fixed sequence of replies, one per `generate` call, and
    /// counts how many calls were made. Processing is strictly sequential,
    /// so scripting by call order is deterministic.
    struct ScriptedClient {
        replies: Mutex<VecDeque<Result<String, String>>>,
        calls: Mutex<usize>,
    }

    impl ScriptedClient {
        fn new(replies: Vec<Result<&str, &str>>) -> Self {
            Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(str::to_string).map_err(str::to_string))
                        .collect(),
                ),
                calls: Mutex::new(0),
            }
        }

        fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl TextGenerator for ScriptedClient {
        async fn generate(
            &self,
            _system_instruction: &str,
            _prompt: &str,
        ) -> Result<String, GeminiError> {
            *self.calls.lock().unwrap() += 1;
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted client ran out of replies");
            reply.map_err(|message| GeminiError::ApiError {
                status: 500,
                message,
            })
        }
    }

    fn record(raw_term: &str, label: &str) -> TermRecord {
        TermRecord {
            raw_term: raw_term.into(),
            label: label.into(),
        }
    }

    fn enricher(client: &ScriptedClient) -> Enricher<'_, ScriptedClient> {
        Enricher::new(client, Duration::ZERO)
    }

    #[tokio::test]
    async fn scenario_two_successes_one_sentinel() {
        let client = ScriptedClient::new(vec![
            Ok("carbonate mounds"),
            Ok("A carbonate mound is a buildup that forms on the seafloor."),
            Ok("Paraná Basin"),
            Ok("The Paraná Basin is a sedimentary basin that covers part of Brazil."),
            Ok("UNKNOWN_TERM"),
        ]);
        let records = vec![
            record("carbonatemounds", "LITOLOGIA"),
            record("Paraná", "BACIA"),
            record("xyzzy123", "UNKNOWN"),
        ];

        let outcome = enricher(&client)
            .run(&records, &BatchProgress::hidden(records.len()))
            .await;

        assert_eq!(outcome.successes.len(), 2);
        assert_eq!(outcome.successes[0].corrected_term, "carbonate mounds");
        assert_eq!(outcome.successes[0].label, "LITOLOGIA");
        assert_eq!(outcome.successes[1].corrected_term, "Paraná Basin");
        assert_eq!(outcome.successes[1].label, "BACIA");

        assert_eq!(outcome.review.len(), 1);
        assert_eq!(outcome.review[0].original_term, "xyzzy123");
        assert_eq!(outcome.review[0].reason, ReviewReason::NotRecognized);
        assert_eq!(outcome.review[0].detail, UNKNOWN_TERM_SENTINEL);
    }

    #[tokio::test]
    async fn every_record_lands_in_exactly_one_table() {
        let client = ScriptedClient::new(vec![
            Ok("halite"),
            Ok("Halite is a mineral that consists of sodium chloride."),
            Ok("UNKNOWN_TERM"),
            Err("boom"),
            Ok("turbidite"),
            Err("definition failed"),
        ]);
        let records = vec![
            record("halite", "LITOLOGIA"),
            record("qqqq", "UNKNOWN"),
            record("netgross", "PROPRIEDADE"),
            record("turbidito", "LITOLOGIA"),
        ];

        let outcome = enricher(&client)
            .run(&records, &BatchProgress::hidden(records.len()))
            .await;

        assert_eq!(outcome.successes.len() + outcome.review.len(), records.len());
        for success in &outcome.successes {
            assert!(
                !outcome
                    .review
                    .iter()
                    .any(|r| r.original_term == success.corrected_term)
            );
        }
    }

    #[tokio::test]
    async fn unrecognized_term_never_reaches_definer() {
        let client = ScriptedClient::new(vec![Ok("UNKNOWN_TERM")]);
        let records = vec![record("xyzzy123", "UNKNOWN")];

        let outcome = enricher(&client)
            .run(&records, &BatchProgress::hidden(records.len()))
            .await;

        // One correction call only; no definition call was issued.
        assert_eq!(client.call_count(), 1);
        assert_eq!(outcome.review.len(), 1);
        assert_eq!(outcome.review[0].reason, ReviewReason::NotRecognized);
    }

    #[tokio::test]
    async fn correction_failure_skips_definition_call() {
        let client = ScriptedClient::new(vec![Err("timeout")]);
        let records = vec![record("halite", "LITOLOGIA")];

        let outcome = enricher(&client)
            .run(&records, &BatchProgress::hidden(records.len()))
            .await;

        assert_eq!(client.call_count(), 1);
        assert_eq!(outcome.review.len(), 1);
        assert_eq!(outcome.review[0].reason, ReviewReason::CallFailed);
        assert!(outcome.review[0].detail.contains("timeout"));
    }

    #[tokio::test]
    async fn single_definition_failure_does_not_cascade() {
        let client = ScriptedClient::new(vec![
            Ok("halite"),
            Ok("Halite is a mineral that consists of sodium chloride."),
            Ok("anhydrite"),
            Err("server exploded"),
            Ok("turbidite"),
            Ok("A turbidite is a deposit that results from a turbidity current."),
        ]);
        let records = vec![
            record("halite", "LITOLOGIA"),
            record("anidrita", "LITOLOGIA"),
            record("turbidito", "LITOLOGIA"),
        ];

        let outcome = enricher(&client)
            .run(&records, &BatchProgress::hidden(records.len()))
            .await;

        assert_eq!(outcome.successes.len(), 2);
        assert_eq!(outcome.review.len(), 1);
        assert_eq!(outcome.review[0].original_term, "anidrita");
        assert_eq!(outcome.review[0].reason, ReviewReason::CallFailed);
        assert!(outcome.review[0].detail.contains("server exploded"));
    }

    #[tokio::test]
    async fn definition_failure_reports_original_term() {
        let client = ScriptedClient::new(vec![Ok("corrected form"), Err("nope")]);
        let records = vec![record("raw form", "BACIA")];

        let outcome = enricher(&client)
            .run(&records, &BatchProgress::hidden(records.len()))
            .await;

        // Review rows always carry the original term, not the corrected one.
        assert_eq!(outcome.review[0].original_term, "raw form");
    }

    #[tokio::test]
    async fn stored_text_is_trimmed() {
        let client = ScriptedClient::new(vec![
            Ok("  carbonate mounds \n"),
            Ok("\n A carbonate mound is a buildup that forms on the seafloor. "),
        ]);
        let records = vec![record("carbonatemounds", "LITOLOGIA")];

        let outcome = enricher(&client)
            .run(&records, &BatchProgress::hidden(records.len()))
            .await;

        assert_eq!(outcome.successes[0].corrected_term, "carbonate mounds");
        assert_eq!(
            outcome.successes[0].definition,
            "A carbonate mound is a buildup that forms on the seafloor."
        );
    }

    #[tokio::test]
    async fn empty_input_produces_empty_tables() {
        let client = ScriptedClient::new(vec![]);

        let outcome = enricher(&client).run(&[], &BatchProgress::hidden(0)).await;

        assert!(outcome.successes.is_empty());
        assert!(outcome.review.is_empty());
        assert_eq!(client.call_count(), 0);
    }
}
