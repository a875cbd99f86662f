//! Core schema definition types.
//!
//! Provides a backend-agnostic type system for describing the hospital schema.
//! These types drive Cozo DDL, portable SQL DDL, and the integrity checks run
//! by the data-access layer (Cozo itself has no foreign keys or check
//! constraints).

/// Represents a database data type.
///
/// Maps to the Cozo and SQL type systems via `cozo_type()` and `sql_type()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// String/text data
    String,
    /// Integer data
    Int,
    /// Floating point data
    Float,
    /// Boolean data
    Bool,
}

impl DataType {
    /// Returns the Cozo type name for this data type.
    pub fn cozo_type(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Int => "Int",
            DataType::Float => "Float",
            DataType::Bool => "Bool",
        }
    }

    /// Returns the SQL type name for this data type.
    pub fn sql_type(&self) -> &'static str {
        match self {
            DataType::String => "TEXT",
            DataType::Int => "INTEGER",
            DataType::Float => "REAL",
            DataType::Bool => "BOOLEAN",
        }
    }
}

/// Default applied when an insert omits a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Fixed text, e.g. `"Scheduled"`
    Text(&'static str),
    /// Fixed integer
    Int(i64),
    /// The local time of the insert, formatted `%Y-%m-%d %H:%M:%S`.
    ///
    /// Stamped by the data-access layer, not by the engine.
    CurrentTimestamp,
}

/// Represents a field in a schema relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    /// Field name (e.g., "patient_id", "first_name")
    pub name: &'static str,

    /// Field data type
    pub data_type: DataType,

    /// Whether the column accepts null.
    pub nullable: bool,

    /// Default value (if any). None means no default.
    pub default: Option<DefaultValue>,

    /// Closed set of accepted values. Empty means unconstrained.
    pub allowed: &'static [&'static str],
}

impl SchemaField {
    /// A required column with no default.
    pub const fn new(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: false,
            default: None,
            allowed: &[],
        }
    }

    /// Mark the column as nullable.
    pub const fn optional(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Attach a default value.
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Restrict the column to a closed set of values.
    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }

    /// True when an insert must supply a value for this column.
    pub fn is_required(&self) -> bool {
        !self.nullable && self.default.is_none()
    }
}

/// A foreign key from one column of a relation to the key of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    /// Referencing column in the owning relation
    pub field: &'static str,

    /// Target relation name
    pub target: &'static str,

    /// Referenced column in the target (its key)
    pub target_field: &'static str,
}

/// Represents a complete database relation/table.
#[derive(Debug, Clone)]
pub struct SchemaRelation {
    /// Relation name (e.g., "patient", "admission")
    pub name: &'static str,

    /// Fields that form the key (must be unique)
    pub key_fields: &'static [SchemaField],

    /// Fields that are associated values
    pub value_fields: &'static [SchemaField],

    /// References to other relations
    pub foreign_keys: &'static [ForeignKey],
}

impl SchemaRelation {
    /// Returns all fields in this relation (key + value).
    pub fn all_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.key_fields.iter().chain(self.value_fields.iter())
    }

    /// Returns the total number of fields.
    pub fn field_count(&self) -> usize {
        self.key_fields.len() + self.value_fields.len()
    }

    /// Name of the (single) identifier column.
    pub fn id_field(&self) -> &'static str {
        self.key_fields.first().map(|f| f.name).unwrap_or("id")
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.all_fields().find(|f| f.name == name)
    }

    /// The foreign key declared on `field`, if any.
    pub fn foreign_key(&self, field: &str) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_cozo_types() {
        assert_eq!(DataType::String.cozo_type(), "String");
        assert_eq!(DataType::Int.cozo_type(), "Int");
        assert_eq!(DataType::Float.cozo_type(), "Float");
        assert_eq!(DataType::Bool.cozo_type(), "Bool");
    }

    #[test]
    fn test_datatype_sql_types() {
        assert_eq!(DataType::String.sql_type(), "TEXT");
        assert_eq!(DataType::Int.sql_type(), "INTEGER");
        assert_eq!(DataType::Float.sql_type(), "REAL");
        assert_eq!(DataType::Bool.sql_type(), "BOOLEAN");
    }

    #[test]
    fn test_schema_field_builders() {
        const STATUS: SchemaField = SchemaField::new("status", DataType::String)
            .with_default(DefaultValue::Text("Available"))
            .one_of(&["Available", "Occupied"]);

        assert_eq!(STATUS.name, "status");
        assert!(!STATUS.nullable);
        assert_eq!(STATUS.default, Some(DefaultValue::Text("Available")));
        assert_eq!(STATUS.allowed.len(), 2);
        assert!(!STATUS.is_required());
    }

    #[test]
    fn test_required_and_optional_fields() {
        let required = SchemaField::new("first_name", DataType::String);
        let optional = SchemaField::new("email", DataType::String).optional();

        assert!(required.is_required());
        assert!(!optional.is_required());
    }

    #[test]
    fn test_schema_relation_lookups() {
        const KEY_FIELDS: &[SchemaField] = &[SchemaField::new("ward_id", DataType::Int)];
        const VALUE_FIELDS: &[SchemaField] = &[
            SchemaField::new("name", DataType::String),
            SchemaField::new("department_id", DataType::Int).optional(),
        ];
        const FOREIGN_KEYS: &[ForeignKey] = &[ForeignKey {
            field: "department_id",
            target: "department",
            target_field: "department_id",
        }];
        let rel = SchemaRelation {
            name: "ward",
            key_fields: KEY_FIELDS,
            value_fields: VALUE_FIELDS,
            foreign_keys: FOREIGN_KEYS,
        };

        assert_eq!(rel.field_count(), 3);
        assert_eq!(rel.id_field(), "ward_id");
        assert_eq!(rel.all_fields().map(|f| f.name).collect::<Vec<_>>(), vec!["ward_id", "name", "department_id"]);
        assert!(rel.field("name").is_some());
        assert!(rel.field("missing").is_none());
        assert_eq!(rel.foreign_key("department_id").map(|fk| fk.target), Some("department"));
        assert!(rel.foreign_key("name").is_none());
    }
}
