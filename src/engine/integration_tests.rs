// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio_util::sync::CancellationToken;

use crate::config::{parse_config, validate_config, ExportFormat, RuleSet};
use crate::engine::{render_strings, TallyPipeline};
use crate::errors::FailureStrategy;
use crate::extractors::SourceKind;
use crate::ocr::stub::{ScriptedEngine, Step};
use crate::ocr::{BatchOptions, OcrBatchRunner, OcrImage};
use crate::report::{exporter_for, ReportTable};

/// End-to-end tests: raw text in, rendered and exported values out
#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> TallyPipeline {
        TallyPipeline::new(RuleSet::standard()).expect("standard rules build")
    }

    fn manual(pipeline: &TallyPipeline, text: &str) -> Vec<String> {
        render_strings(&pipeline.tally(text, SourceKind::Manual))
    }

    #[test]
    fn test_repeated_ticket_collapses() {
        let pipeline = standard();

        assert_eq!(manual(&pipeline, "007 007"), vec!["007-2"]);
        assert_eq!(manual(&pipeline, "007 008 007"), vec!["007-2", "008"]);
    }

    #[test]
    fn test_mixed_counts_and_keyword() {
        let pipeline = standard();

        assert_eq!(
            manual(&pipeline, "45 45 7-2, BOX"),
            vec!["045-2", "007-2", "BOX"]
        );
        assert_eq!(
            manual(&pipeline, "45 45 45 7-2, BOX"),
            vec!["045-3", "007-2", "BOX"]
        );
    }

    #[test]
    fn test_padding_and_rejection() {
        let pipeline = standard();

        assert_eq!(manual(&pipeline, "7 45 123"), vec!["007", "045", "123"]);
        assert!(manual(&pipeline, "").is_empty());
        assert!(manual(&pipeline, "abc").is_empty());
        assert!(manual(&pipeline, "1234 x12").is_empty());
    }

    #[test]
    fn test_count_is_clamped_to_ceiling() {
        let pipeline = standard();

        assert_eq!(manual(&pipeline, "12-9999"), vec!["012-500"]);
        assert_eq!(manual(&pipeline, "12-0"), vec!["012"]);
    }

    #[test]
    fn test_keyword_ignores_count_suffix() {
        let pipeline = standard();

        assert_eq!(manual(&pipeline, "ac-3 half off"), vec!["AC", "HALF", "OFF"]);
    }

    #[test]
    fn test_rendered_values_reparse_to_same_tally() {
        let pipeline = standard();
        let first = pipeline.tally("9 45.3 45 100..2 7 9 9 300-12", SourceKind::Manual);
        let rendered = render_strings(&first);

        let second = pipeline.tally(&rendered.join(" "), SourceKind::Manual);

        assert_eq!(render_strings(&second), rendered);
        assert_eq!(second.total(), first.total());
    }

    #[test]
    fn test_keyword_and_over_ceiling_totals_do_not_reparse() {
        let pipeline = standard();

        // A keyword never reads a count back, so repeated keywords collapse
        let keywords = render_strings(&pipeline.tally("box box", SourceKind::Manual));
        assert_eq!(keywords, vec!["BOX-2"]);
        assert_eq!(manual(&pipeline, &keywords.join(" ")), vec!["BOX"]);

        // Totals can exceed the per-token ceiling; re-parsing clamps them again
        let totals = render_strings(&pipeline.tally("1-500 1-500", SourceKind::Manual));
        assert_eq!(totals, vec!["001-1000"]);
        assert_eq!(manual(&pipeline, &totals.join(" ")), vec!["001-500"]);
    }

    #[test]
    fn test_legacy_revision_from_yaml() {
        let cfg = parse_config("rules:\n  revision: legacy\n").unwrap();
        let rules = validate_config(&cfg, "inline").unwrap();
        let pipeline = TallyPipeline::new(rules).unwrap();

        assert_eq!(manual(&pipeline, "7 45 45-20 BOX"), vec!["045-11"]);
    }

    #[test]
    fn test_text_report_exports_as_plain_text() {
        let report = standard().text_report("45 45", "7-2, BOX");
        let table = ReportTable::from_text_report(&report);

        let mut out = Vec::new();
        exporter_for(ExportFormat::Text)
            .export(&[table], &mut out)
            .unwrap();

        let expected = "\
Text Generator
Half   Full   Merged
-----  -----  ------
045-2  007-2  045-2
       BOX    007-2
              BOX
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_chat_log_strips_metadata_and_counts() {
        let log = "\
[12/01/24, 10:15:32] Ann: 45 45 7-2
12/01/24, 10:16 - Bob: box and 123...3
12/01/24, 10:17 - Bob: <Media omitted>
";
        let report = standard().chat_log_report(log);
        let rendered: Vec<String> = report.entries.iter().map(ToString::to_string).collect();

        assert_eq!(rendered, vec!["045-2", "007-2", "BOX", "123-3"]);
        assert_eq!(report.total, 8);
    }

    #[tokio::test]
    async fn test_image_batch_to_json() {
        let engine = ScriptedEngine::new()
            .with("front.png", Step::Text("45-2BOX 7"))
            .with("back.png", Step::Fail("unreadable"))
            .with("side.png", Step::Text("7"));
        let pipeline = standard();
        let options = BatchOptions {
            timeout: None,
            failure_strategy: FailureStrategy::ContinueOnError,
        };
        let images: Vec<OcrImage> = ["front.png", "back.png", "side.png"]
            .iter()
            .map(|p| OcrImage::new(*p))
            .collect();

        let outcome = OcrBatchRunner::new(&pipeline, options)
            .run(&engine, &images, &CancellationToken::new(), None)
            .await
            .unwrap();
        let table = ReportTable::from_image_report(&outcome.report());

        let mut out = Vec::new();
        exporter_for(ExportFormat::Json)
            .export(&[table], &mut out)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{
                "title": "Image Generator",
                "headers": ["Value"],
                "rows": [["045-2"], ["BOX"], ["007-2"]],
                "notes": [
                    "Total Numbers: 5",
                    "Failed: back.png: OCR failed for 'back.png': unreadable"
                ]
            }])
        );
        assert_eq!(engine.sessions_terminated(), 1);
    }
}
