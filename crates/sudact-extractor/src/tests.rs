//! Integration tests for the document parser

#[cfg(test)]
mod tests {
    use crate::{BatchRunner, DateError, DocumentParser, ExtractorConfig, ExtractorError};
    use sudact_domain::metadata::{NO_INFORMATION, UNDEFINED};
    use sudact_domain::{
        Accused, ArticleRefs, FieldValue, Label, MetadataRecord, MetadataValue, RawDocument,
    };
    use sudact_nlp::{
        MockClassifier, MockNameExtractor, MockTokenizer, PatronymicNameExtractor,
        RuSentenceTokenizer,
    };

    const RULING: &str = r#"<!DOCTYPE html>
<html>
<head><title>Судебные и нормативные акты РФ</title><script>var установил = 1;</script></head>
<body>
  <h1>Приговор № 1-44/2016 от 3 марта 2016 г. по делу № 1-44/2016</h1>
  <div class="b-justice"><a href="/court/ab12">Советский районный суд г. Томска (Томская область) - Уголовное</a></div>
  <h3>Судьи дела:</h3>
  <div>Петрова Е.В. (судья)</div>
  <div class="b-practice">
    <a href="/practice/1">Судебная практика по применению нормы ст. 158 УК РФ</a>
  </div>
  <div class="text">
    ПРИГОВОР<br/>
    ИМЕНЕМ РОССИЙСКОЙ ФЕДЕРАЦИИ<br/>
    Советский районный суд г. Томска в составе председательствующего судьи Петровой Е.В.,<br/>
    при секретаре Кузнецовой А.А.,<br/>
    с участием государственного обвинителя Смирнова Д.Д.,<br/>
    рассмотрев в открытом судебном заседании уголовное дело в отношении<br/>
    Иванов А.Б., подсудимого,<br/>
    обвиняемого в совершении преступления, предусмотренного ст. <a href="/law/158">158 ч.2 п. «в» УК РФ</a><br/>
    У С Т А Н О В И Л:<br/>
    Иванов А.Б. совершил тайное хищение имущества потерпевшего при следующих обстоятельствах.<br/>
    Свидетель Сидоров показал, что видел подсудимого у дома потерпевшего.<br/>
    Вина подсудимого подтверждается протоколом осмотра места происшествия.<br/>
    ПРИГОВОРИЛ:<br/>
    Признать Иванов А.Б. виновным.<br/>
    Судья Петрова Е.В.
  </div>
</body>
</html>"#;

    fn raw(html: &str) -> RawDocument {
        RawDocument::new(
            42,
            "Приговор № 1-44/2016 от 3 марта 2016 г. по делу № 1-44/2016",
            "https://sudact.ru/regular/doc/abc/",
            html,
        )
    }

    fn mock_parser(
        classifier: MockClassifier,
    ) -> DocumentParser<MockClassifier, MockTokenizer, MockNameExtractor> {
        DocumentParser::new(
            classifier,
            MockTokenizer::new(),
            MockNameExtractor::empty(),
            ExtractorConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_full_parse_flow() {
        let classifier = MockClassifier::new(Label::Fabula)
            .with_label(
                "Свидетель Сидоров показал, что видел подсудимого у дома потерпевшего.",
                Label::Witness,
            )
            .with_label(
                "Вина подсудимого подтверждается протоколом осмотра места происшествия.",
                Label::Prove,
            );
        let parser = mock_parser(classifier.clone());

        let parsed = parser.parse(&raw(RULING)).unwrap();

        assert_eq!(parsed.id, 42);
        assert_eq!(parsed.url, "https://sudact.ru/regular/doc/abc/");

        let metadata = &parsed.metadata;
        assert_eq!(metadata.date, FieldValue::Found("2016-03-03".to_string()));
        assert_eq!(metadata.number, FieldValue::Found("1-44/2016".to_string()));
        assert_eq!(
            metadata.court,
            FieldValue::Found("Советский районный суд г. Томска (Томская область)".to_string())
        );
        assert_eq!(metadata.region, FieldValue::Found("Томская область".to_string()));
        assert_eq!(metadata.judge, FieldValue::Found("Петрова Е.В.".to_string()));
        assert_eq!(
            metadata.article,
            ArticleRefs::Found(vec!["158 УК РФ".to_string(), "158 ч.2 п. «в» УК РФ".to_string()])
        );
        assert_eq!(metadata.accused, Accused::Identified(vec!["Иванов А.Б.".to_string()]));

        let body = parsed.segmentation.body().expect("standard document");
        let labels: Vec<Label> = body.spans().iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Label::Fabula, Label::Witness, Label::Prove]);
        assert_eq!(body.sentence_count(), 3);
        assert_eq!(classifier.call_count(), 1);
    }

    #[test]
    fn test_record_always_has_seven_non_empty_values() {
        let html = "<h1>Постановление от 1 мая 2016 г.</h1><p>Текст без маркеров</p>";
        let metadata = mock_parser(MockClassifier::default())
            .parse_metadata(&raw(html))
            .unwrap();

        let entries = metadata.entries();
        assert_eq!(entries.len(), 7);
        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, MetadataRecord::KEYS.to_vec());
        assert!(entries.iter().all(|(_, v)| !v.is_empty()));

        assert_eq!(metadata.date.value(), Some("2016-05-01"));
        assert_eq!(metadata.number.as_legacy_str(), UNDEFINED);
        assert_eq!(metadata.region, FieldValue::Absent);
        assert_eq!(
            metadata.accused.to_value(),
            MetadataValue::Text(NO_INFORMATION.to_string())
        );
    }

    #[test]
    fn test_non_standard_document() {
        let html = "<h1>Приговор № 1 от 11 июля 2015 г.</h1><p>УСТАНОВИЛ: текст без резолютивной части</p>";
        let classifier = MockClassifier::default();
        let parsed = mock_parser(classifier.clone()).parse(&raw(html)).unwrap();

        assert!(parsed.segmentation.is_non_standard());
        assert_eq!(classifier.call_count(), 0);
        assert_eq!(parsed.metadata.date.value(), Some("2015-07-11"));
    }

    #[test]
    fn test_missing_heading_fails_on_date() {
        let result = mock_parser(MockClassifier::default()).parse(&raw("<p>Нет заголовка</p>"));
        assert!(matches!(
            result,
            Err(ExtractorError::Date(DateError::MissingFromMarker))
        ));
    }

    #[test]
    fn test_classifier_failure_fails_document() {
        let result = mock_parser(MockClassifier::default().failing()).parse(&raw(RULING));
        assert!(matches!(result, Err(ExtractorError::Classifier(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ExtractorConfig::default();
        config.accused_dominance_threshold = 0.0;
        let result = DocumentParser::new(
            MockClassifier::default(),
            MockTokenizer::new(),
            MockNameExtractor::empty(),
            config,
        );
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_with_real_tokenizer_and_recognizer() {
        let parser = DocumentParser::new(
            MockClassifier::new(Label::Meditation),
            RuSentenceTokenizer::new(),
            PatronymicNameExtractor::new(),
            ExtractorConfig::default(),
        )
        .unwrap();

        let html = "<h1>Приговор № 1-9/2018 от 12 апреля 2018 г.</h1>\
                    <p>уголовное дело в отношении гражданина Сидорова Ивана Петровича, осужденного ранее</p>\
                    <p>УСТАНОВИЛ:</p>\
                    <p>Подсудимый по ст. 158 УК РФ вину признал. Суд учитывает раскаяние.</p>\
                    <p>ПОСТАНОВИЛ:</p>";
        let parsed = parser.parse(&raw(html)).unwrap();

        assert_eq!(
            parsed.metadata.accused,
            Accused::Identified(vec!["И.П. Сидорова".to_string()])
        );
        let body = parsed.segmentation.body().unwrap();
        assert_eq!(body.sentence_count(), 2);
        assert_eq!(body.spans().len(), 1);
        assert_eq!(body.spans()[0].label, Label::Meditation);
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let runner = BatchRunner::new(mock_parser(MockClassifier::default()), 2);

        let docs = vec![
            RawDocument::new(1, "", "", "<h1>Приговор № 1 от 1 мая 2016 г.</h1>"),
            RawDocument::new(2, "", "", "<p>без заголовка</p>"),
            RawDocument::new(3, "", "", RULING),
        ];
        let results = runner.run(docs).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().id, 1);
        assert!(results[0].as_ref().unwrap().segmentation.is_non_standard());
        assert!(matches!(results[1], Err(ExtractorError::Date(_))));
        assert_eq!(results[2].as_ref().unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_batch_metadata_only() {
        let classifier = MockClassifier::default();
        let runner = BatchRunner::new(mock_parser(classifier.clone()), 0);
        assert_eq!(runner.concurrency(), 1);

        let results = runner.run_metadata(vec![raw(RULING), raw(RULING)]).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(classifier.call_count(), 0);
    }
}
