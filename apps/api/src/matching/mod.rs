// Job matching: ranks job postings for an applicant.
// The scoring itself is pure; handlers fetch the inputs from the stores.

pub mod experience;
pub mod handlers;
pub mod matcher;
pub mod weights;
