//! CDS feature extraction.
//!
//! Walks annotation features, keeps the CDS ones and resolves an identifier,
//! a description and an amino-acid sequence for each of them. Identifier and
//! translation lookups are ordered lists of strategies; the first strategy
//! that yields a value wins.

use crate::{
    consts::{CDS, LOCUS_TAG, PRODUCT, PROTEIN_ID, TRANSLATION},
    error::{CdsError, CdsResult},
};

use log::debug;

/// The view of an annotation feature the extractor needs.
///
/// Coordinates are whatever the parser reports for the feature and are used
/// verbatim in fabricated identifiers and error messages.
pub trait CodingFeature {
    /// Primary category tag, e.g. `CDS` or `gene`.
    fn kind(&self) -> String;

    /// Start and end coordinates of the feature.
    fn bounds(&self) -> CdsResult<(i64, i64)>;

    /// First value of the named qualifier, if any.
    fn qualifier(&self, key: &str) -> Option<&str>;

    /// Translates the feature's own nucleotide sequence.
    fn translate(&self) -> CdsResult<String>;
}

/// A protein sequence derived from one CDS feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

/// Where an identifier can come from, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    LocusTag,
    ProteinId,
    Coordinates,
}

pub const ID_POLICY: [IdSource; 3] = [
    IdSource::LocusTag,
    IdSource::ProteinId,
    IdSource::Coordinates,
];

impl IdSource {
    pub fn resolve<F>(self, feature: &F, fabricate_ids: bool) -> CdsResult<Option<String>>
    where
        F: CodingFeature + ?Sized,
    {
        match self {
            IdSource::LocusTag => Ok(non_blank(feature.qualifier(LOCUS_TAG))),
            IdSource::ProteinId => Ok(non_blank(feature.qualifier(PROTEIN_ID))),
            IdSource::Coordinates if fabricate_ids => {
                let (start, end) = feature.bounds()?;
                Ok(Some(format!("{}_{}_{}", CDS, start, end)))
            }
            IdSource::Coordinates => Ok(None),
        }
    }
}

/// Where a translation can come from, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSource {
    Stored,
    Computed,
}

pub const TRANSLATION_POLICY: [TranslationSource; 2] =
    [TranslationSource::Stored, TranslationSource::Computed];

impl TranslationSource {
    pub fn resolve<F>(self, feature: &F) -> CdsResult<Option<String>>
    where
        F: CodingFeature + ?Sized,
    {
        match self {
            // taken verbatim, whitespace is dropped when the record is written
            TranslationSource::Stored => Ok(feature.qualifier(TRANSLATION).map(str::to_string)),
            TranslationSource::Computed => feature.translate().map(Some),
        }
    }
}

/// Resolves a feature identifier by trying each [`IdSource`] in turn.
pub fn resolve_id<F>(feature: &F, fabricate_ids: bool) -> CdsResult<String>
where
    F: CodingFeature + ?Sized,
{
    for source in ID_POLICY {
        if let Some(id) = source.resolve(feature, fabricate_ids)? {
            return Ok(id);
        }
    }

    let (start, _) = feature.bounds()?;
    Err(CdsError::MissingIdentifier { start })
}

/// Resolves the amino-acid sequence of a feature by trying each
/// [`TranslationSource`] in turn.
pub fn resolve_translation<F>(feature: &F, id: &str) -> CdsResult<String>
where
    F: CodingFeature + ?Sized,
{
    for source in TRANSLATION_POLICY {
        if let Some(translation) = source.resolve(feature)? {
            if translation.trim().is_empty() {
                break;
            }
            return Ok(translation);
        }
    }

    Err(CdsError::EmptyTranslation { id: id.to_string() })
}

pub fn resolve_description<F>(feature: &F) -> String
where
    F: CodingFeature + ?Sized,
{
    non_blank(feature.qualifier(PRODUCT)).unwrap_or_default()
}

/// Builds one [`ProteinRecord`] per CDS feature, in input order.
///
/// Features of any other category are skipped. The first feature that cannot
/// be resolved aborts the whole extraction.
pub fn extract_records<I, F>(features: I, fabricate_ids: bool) -> CdsResult<Vec<ProteinRecord>>
where
    I: IntoIterator<Item = F>,
    F: CodingFeature,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for feature in features {
        if feature.kind() != CDS {
            skipped += 1;
            continue;
        }

        let id = resolve_id(&feature, fabricate_ids)?;
        let sequence = resolve_translation(&feature, &id)?;
        let description = resolve_description(&feature);

        records.push(ProteinRecord {
            id,
            description,
            sequence,
        });
    }

    debug!("Skipped {} non-CDS features", skipped);

    Ok(records)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockFeature {
        kind: &'static str,
        start: i64,
        end: i64,
        qualifiers: HashMap<&'static str, &'static str>,
        computed: &'static str,
    }

    impl MockFeature {
        fn cds(start: i64, end: i64) -> Self {
            MockFeature {
                kind: "CDS",
                start,
                end,
                computed: "MKV",
                ..Default::default()
            }
        }

        fn with(mut self, key: &'static str, value: &'static str) -> Self {
            self.qualifiers.insert(key, value);
            self
        }

        fn computed(mut self, value: &'static str) -> Self {
            self.computed = value;
            self
        }
    }

    impl CodingFeature for MockFeature {
        fn kind(&self) -> String {
            self.kind.to_string()
        }

        fn bounds(&self) -> CdsResult<(i64, i64)> {
            Ok((self.start, self.end))
        }

        fn qualifier(&self, key: &str) -> Option<&str> {
            self.qualifiers.get(key).copied()
        }

        fn translate(&self) -> CdsResult<String> {
            Ok(self.computed.to_string())
        }
    }

    #[test]
    fn test_locus_tag_wins_over_protein_id() {
        let feature = MockFeature::cds(1, 10)
            .with("locus_tag", "A")
            .with("protein_id", "B");

        assert_eq!(resolve_id(&feature, false).unwrap(), "A");
    }

    #[test]
    fn test_protein_id_used_without_locus_tag() {
        let feature = MockFeature::cds(1, 10).with("protein_id", "WP_000001.1");

        assert_eq!(resolve_id(&feature, false).unwrap(), "WP_000001.1");
    }

    #[test]
    fn test_fabricated_id_format() {
        let feature = MockFeature::cds(1306, 1674);

        assert_eq!(resolve_id(&feature, true).unwrap(), "CDS_1306_1674");
    }

    #[test]
    fn test_fabrication_does_not_override_real_ids() {
        let feature = MockFeature::cds(1306, 1674).with("protein_id", "B");

        assert_eq!(resolve_id(&feature, true).unwrap(), "B");
    }

    #[test]
    fn test_missing_identifier_reports_start() {
        let feature = MockFeature::cds(1306, 1674);

        match resolve_id(&feature, false) {
            Err(CdsError::MissingIdentifier { start }) => assert_eq!(start, 1306),
            other => panic!("expected MissingIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_locus_tag_falls_through() {
        let feature = MockFeature::cds(1, 10)
            .with("locus_tag", "  ")
            .with("protein_id", "B");

        assert_eq!(resolve_id(&feature, false).unwrap(), "B");
    }

    #[test]
    fn test_each_id_source_alone() {
        let feature = MockFeature::cds(5, 9).with("protein_id", "P");

        assert_eq!(IdSource::LocusTag.resolve(&feature, true).unwrap(), None);
        assert_eq!(
            IdSource::ProteinId.resolve(&feature, true).unwrap(),
            Some("P".to_string())
        );
        assert_eq!(IdSource::Coordinates.resolve(&feature, false).unwrap(), None);
        assert_eq!(
            IdSource::Coordinates.resolve(&feature, true).unwrap(),
            Some("CDS_5_9".to_string())
        );
    }

    #[test]
    fn test_stored_translation_is_verbatim() {
        let feature = MockFeature::cds(1, 10).with("translation", "MSP\nNPD");

        assert_eq!(resolve_translation(&feature, "x").unwrap(), "MSP\nNPD");
    }

    #[test]
    fn test_computed_translation_fallback() {
        let feature = MockFeature::cds(1, 10).computed("MAC");

        assert_eq!(resolve_translation(&feature, "x").unwrap(), "MAC");
        assert_eq!(TranslationSource::Stored.resolve(&feature).unwrap(), None);
    }

    #[test]
    fn test_empty_stored_translation_is_fatal() {
        let feature = MockFeature::cds(1, 10).with("translation", "");

        match resolve_translation(&feature, "T_0001") {
            Err(CdsError::EmptyTranslation { id }) => assert_eq!(id, "T_0001"),
            other => panic!("expected EmptyTranslation, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_computed_translation_is_fatal() {
        let feature = MockFeature::cds(1, 10).computed("");

        assert!(matches!(
            resolve_translation(&feature, "x"),
            Err(CdsError::EmptyTranslation { .. })
        ));
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let named = MockFeature::cds(1, 10).with("product", "DNA polymerase");
        let unnamed = MockFeature::cds(1, 10);

        assert_eq!(resolve_description(&named), "DNA polymerase");
        assert_eq!(resolve_description(&unnamed), "");
    }

    #[test]
    fn test_extract_skips_non_cds_and_keeps_order() {
        let gene = MockFeature {
            kind: "gene",
            ..Default::default()
        };
        let features = vec![
            MockFeature::cds(1, 10).with("locus_tag", "B"),
            gene,
            MockFeature::cds(20, 30).with("locus_tag", "A"),
        ];

        let records = extract_records(features, false).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_extract_keeps_duplicate_ids() {
        let features = vec![
            MockFeature::cds(1, 10).with("locus_tag", "A"),
            MockFeature::cds(20, 30).with("locus_tag", "A"),
        ];

        assert_eq!(extract_records(features, false).unwrap().len(), 2);
    }

    #[test]
    fn test_extract_aborts_on_first_unresolvable_feature() {
        let features = vec![
            MockFeature::cds(1, 10).with("locus_tag", "A"),
            MockFeature::cds(20, 30),
            MockFeature::cds(40, 50).with("locus_tag", "C"),
        ];

        assert!(matches!(
            extract_records(features, false),
            Err(CdsError::MissingIdentifier { start: 20 })
        ));
    }

    #[test]
    fn test_extract_is_repeatable() {
        let build = || {
            vec![
                MockFeature::cds(1, 10).with("locus_tag", "A").with("product", "p"),
                MockFeature::cds(20, 30).computed("MAC"),
            ]
        };

        let first = extract_records(build(), true).unwrap();
        let second = extract_records(build(), true).unwrap();

        assert_eq!(first, second);
        assert_eq!(first[1].id, "CDS_20_30");
    }
}
