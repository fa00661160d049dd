//! Native database type to target-language type mapping

use serde::{Deserialize, Serialize};

/// Target-language type emitted into generated sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageType {
    Number,
    #[serde(rename = "string")]
    TsString,
    Boolean,
    #[serde(rename = "Date")]
    TsDate,
}

impl LanguageType {
    /// Get the type string for code generation
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageType::Number => "number",
            LanguageType::TsString => "string",
            LanguageType::Boolean => "boolean",
            LanguageType::TsDate => "Date",
        }
    }

    /// Placeholder literal used when a form needs an initial value
    pub fn empty_literal(&self) -> &'static str {
        match self {
            LanguageType::Number => "undefined",
            LanguageType::TsString => "''",
            LanguageType::Boolean => "false",
            LanguageType::TsDate => "undefined",
        }
    }
}

/// Default form/list control rendered for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlControl {
    Input,
    Textarea,
    Number,
    Radio,
    Select,
    Datetime,
    Date,
}

impl HtmlControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            HtmlControl::Input => "input",
            HtmlControl::Textarea => "textarea",
            HtmlControl::Number => "number",
            HtmlControl::Radio => "radio",
            HtmlControl::Select => "select",
            HtmlControl::Datetime => "datetime",
            HtmlControl::Date => "date",
        }
    }
}

/// Map a native database type name to a language type and default control.
///
/// Lookup is case-insensitive. Unrecognized types fall back to
/// (`string`, `input`) rather than failing: an unknown extension type must
/// not block scaffold generation.
pub fn map_type(native_type: &str) -> (LanguageType, HtmlControl) {
    let ty = native_type.trim().to_lowercase();
    // Strip a length/precision suffix, e.g. "varchar(255)" -> "varchar"
    let base = ty.split('(').next().unwrap_or(&ty).trim();

    match base {
        // Integer and numeric family
        "int" | "int2" | "int4" | "int8" | "integer" | "smallint" | "bigint" | "tinyint"
        | "mediumint" | "serial" | "smallserial" | "bigserial" | "float" | "float4" | "float8"
        | "double" | "double precision" | "real" | "decimal" | "numeric" | "money" => {
            (LanguageType::Number, HtmlControl::Number)
        }

        // Boolean family
        "bool" | "boolean" | "bit" => (LanguageType::Boolean, HtmlControl::Radio),

        // Short character family
        "char" | "varchar" | "character" | "character varying" | "bpchar" | "uuid" => {
            (LanguageType::TsString, HtmlControl::Input)
        }

        // Long text and document family
        "text" | "tinytext" | "mediumtext" | "longtext" | "json" | "jsonb" => {
            (LanguageType::TsString, HtmlControl::Textarea)
        }

        // Temporal family
        "date" => (LanguageType::TsDate, HtmlControl::Date),
        "datetime" | "timestamp" | "timestamptz" | "timestamp with time zone"
        | "timestamp without time zone" | "time" | "timetz" => {
            (LanguageType::TsDate, HtmlControl::Datetime)
        }

        other => {
            tracing::debug!("Unrecognized native type '{}', falling back to string", other);
            (LanguageType::TsString, HtmlControl::Input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_types() {
        assert_eq!(map_type("int4"), (LanguageType::Number, HtmlControl::Number));
        assert_eq!(map_type("BIGINT"), (LanguageType::Number, HtmlControl::Number));
        assert_eq!(map_type("numeric"), (LanguageType::Number, HtmlControl::Number));
    }

    #[test]
    fn test_boolean_types() {
        assert_eq!(map_type("bool"), (LanguageType::Boolean, HtmlControl::Radio));
        assert_eq!(map_type("Boolean"), (LanguageType::Boolean, HtmlControl::Radio));
    }

    #[test]
    fn test_string_types() {
        assert_eq!(map_type("varchar"), (LanguageType::TsString, HtmlControl::Input));
        assert_eq!(map_type("varchar(255)"), (LanguageType::TsString, HtmlControl::Input));
        assert_eq!(map_type("text"), (LanguageType::TsString, HtmlControl::Textarea));
    }

    #[test]
    fn test_temporal_types() {
        assert_eq!(map_type("date"), (LanguageType::TsDate, HtmlControl::Date));
        assert_eq!(map_type("timestamptz"), (LanguageType::TsDate, HtmlControl::Datetime));
        assert_eq!(map_type("DATETIME"), (LanguageType::TsDate, HtmlControl::Datetime));
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert_eq!(map_type("tsvector"), (LanguageType::TsString, HtmlControl::Input));
        assert_eq!(map_type("geography"), (LanguageType::TsString, HtmlControl::Input));
    }

    #[test]
    fn test_type_strings() {
        assert_eq!(LanguageType::Number.as_str(), "number");
        assert_eq!(LanguageType::TsDate.as_str(), "Date");
        assert_eq!(HtmlControl::Datetime.as_str(), "datetime");
    }
}
