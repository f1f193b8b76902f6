/// Read parameters shared by GetItem and Query, ready to apply to a builder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadParams {
    /// Whether to use a consistent read.
    pub consistent_read: Option<bool>,
    /// The name of the table to read from.
    pub table_name: String,
}

/// Arguments common to read operations (GetItem, Query).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReadArgs {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl From<ReadArgs> for ReadParams {
    fn from(read_args: ReadArgs) -> Self {
        Self {
            consistent_read: read_args.consistent_read,
            table_name: read_args.table_name,
        }
    }
}

/// apply common read parameters to a GetItem or Query builder
#[macro_export]
macro_rules! apply_read_params {
    ($builder:expr, $read_params:expr) => {{
        let params = $read_params;
        $builder
            .set_consistent_read(params.consistent_read)
            .table_name(params.table_name)
    }};
}
