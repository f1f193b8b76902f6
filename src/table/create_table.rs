use crate::{
    common,
    error::{Error, Result},
};

use aws_sdk_dynamodb::types;

/// Read and write capacity units every created table is provisioned with.
pub const DEFAULT_CAPACITY_UNITS: i64 = 1;

/// Create table parameters, ready to apply to a `CreateTable` builder.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateTableParams {
    /// Caller-supplied definitions followed by the key definitions.
    pub attribute_definitions: Vec<types::AttributeDefinition>,
    /// Whether deletion protection is enabled.
    pub deletion_protection_enabled: Option<bool>,
    /// Key schema, hash key first.
    pub key_schema: Vec<types::KeySchemaElement>,
    /// Always [`DEFAULT_CAPACITY_UNITS`] for both reads and writes.
    pub provisioned_throughput: types::ProvisionedThroughput,
    /// Stream settings.
    pub stream_specification: Option<types::StreamSpecification>,
    /// Storage class of the table.
    pub table_class: Option<types::TableClass>,
    /// The name of the table to create.
    pub table_name: String,
    /// Tags to attach to the table.
    pub tags: Option<Vec<types::Tag>>,
}

/// Create table operation.
///
/// The key schema is always derived from `keys` and the throughput is always
/// [`DEFAULT_CAPACITY_UNITS`]; neither can be overridden here.
///
/// ```rust
/// use aws_sdk_dynamodb::types::ScalarAttributeType;
/// use dynamodb_params::{common, table};
///
/// let keys = common::key::KeyDefinitions {
///     hash_key: common::key::KeyDefinition {
///         name: "id".to_string(),
///         attribute_type: ScalarAttributeType::S,
///     },
///     range_key: Some(common::key::KeyDefinition {
///         name: "ts".to_string(),
///         attribute_type: ScalarAttributeType::N,
///     }),
/// };
/// let params = table::create_table::CreateTable::new("events", keys)
///     .build()
///     .unwrap();
/// assert_eq!(params.key_schema.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CreateTable {
    /// Extra attribute definitions, placed before the key definitions.
    pub attribute_definitions: Vec<types::AttributeDefinition>,
    /// Whether deletion protection is enabled.
    pub deletion_protection_enabled: Option<bool>,
    /// Hash key and optional range key of the table.
    pub keys: common::key::KeyDefinitions,
    /// Stream settings.
    pub stream_specification: Option<types::StreamSpecification>,
    /// Storage class of the table.
    pub table_class: Option<types::TableClass>,
    /// The name of the table to create.
    pub table_name: String,
    /// Tags to attach to the table.
    pub tags: Option<Vec<types::Tag>>,
}

impl CreateTable {
    /// Table with the given keys and no other settings.
    pub fn new(table_name: impl Into<String>, keys: common::key::KeyDefinitions) -> Self {
        Self {
            attribute_definitions: Vec::new(),
            deletion_protection_enabled: None,
            keys,
            stream_specification: None,
            table_class: None,
            table_name: table_name.into(),
            tags: None,
        }
    }

    /// Build the create table parameters.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_params.create_table",
            skip_all,
            fields(table_name = %self.table_name),
            err
        )
    )]
    pub fn build(self) -> Result<CreateTableParams> {
        self.try_into()
    }
}

impl TryFrom<CreateTable> for CreateTableParams {
    type Error = Error;

    fn try_from(create_table: CreateTable) -> Result<Self> {
        let key_schema: common::key::KeySchema = create_table.keys.try_into()?;
        let mut attribute_definitions = create_table.attribute_definitions;
        attribute_definitions.extend(key_schema.attribute_definitions);
        let provisioned_throughput = types::ProvisionedThroughput::builder()
            .read_capacity_units(DEFAULT_CAPACITY_UNITS)
            .write_capacity_units(DEFAULT_CAPACITY_UNITS)
            .build()?;
        let operation = Self {
            attribute_definitions,
            deletion_protection_enabled: create_table.deletion_protection_enabled,
            key_schema: key_schema.key_schema,
            provisioned_throughput,
            stream_specification: create_table.stream_specification,
            table_class: create_table.table_class,
            table_name: create_table.table_name,
            tags: create_table.tags,
        };
        Ok(operation)
    }
}

/// apply create table parameters to a `CreateTable` builder
#[macro_export]
macro_rules! apply_create_table_params {
    ($builder:expr, $create_table_params:expr) => {{
        let params = $create_table_params;
        $builder
            .set_attribute_definitions(Some(params.attribute_definitions))
            .set_deletion_protection_enabled(params.deletion_protection_enabled)
            .set_key_schema(Some(params.key_schema))
            .provisioned_throughput(params.provisioned_throughput)
            .set_stream_specification(params.stream_specification)
            .set_table_class(params.table_class)
            .set_tags(params.tags)
            .table_name(params.table_name)
    }};
}
