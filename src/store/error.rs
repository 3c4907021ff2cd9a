use snafu::Snafu;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum StoreError {
    /// A required field of a new influencer was left empty
    #[snafu(display("Please fill in all required fields: `{field}` is missing"))]
    Validation { field: &'static str },

    /// Every id above the largest stored one has been used
    #[snafu(display("No influencer ids are left to assign"))]
    IdsExhausted,
}
