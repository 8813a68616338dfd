//! Import schemas: the mapping of logical fields to the header spellings a
//! source file might use. One schema value per entity kind; the mapper is
//! generic over them, so each entity's field list stays plain data.

/// One logical field of an import schema.
#[derive(Debug)]
pub struct FieldSpec {
    /// Human-readable field name, used in error and rejection messages.
    pub label: &'static str,
    /// Case-insensitive header spellings, in priority order.
    pub synonyms: &'static [&'static str],
    /// Required fields reject the row when blank.
    pub required: bool,
    /// Identity fields decide whether a row is a spacer: a row with every
    /// identity field blank is skipped silently.
    pub identity: bool,
    /// Inclusive numeric bounds; presence makes the field numeric.
    pub bounds: Option<(f64, f64)>,
}

impl FieldSpec {
    /// A required identity field.
    pub const fn required(label: &'static str, synonyms: &'static [&'static str]) -> FieldSpec {
        FieldSpec {
            label,
            synonyms,
            required: true,
            identity: true,
            bounds: None,
        }
    }

    /// An optional free-text field.
    pub const fn optional(label: &'static str, synonyms: &'static [&'static str]) -> FieldSpec {
        FieldSpec {
            label,
            synonyms,
            required: false,
            identity: false,
            bounds: None,
        }
    }

    /// An optional numeric score on the 0-100 grading scale.
    pub const fn score(label: &'static str, synonyms: &'static [&'static str]) -> FieldSpec {
        FieldSpec {
            label,
            synonyms,
            required: false,
            identity: false,
            bounds: Some((0.0, 100.0)),
        }
    }
}

/// A fixed, immutable field list for one entity kind.
#[derive(Debug)]
pub struct Schema {
    /// Entity name for log summaries.
    pub entity: &'static str,
    /// Fields in validation order; the first identity field doubles as the
    /// row key quoted in rejection messages.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// The field whose value identifies a row to the operator.
    pub(crate) fn key_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.identity)
    }
}
