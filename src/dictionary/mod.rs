pub mod frequency_table;
pub mod word_lists;

pub use frequency_table::FrequencyTable;
pub use word_lists::{
    is_basic_verb,
    is_stopword,
};
