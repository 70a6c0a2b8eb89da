pub mod detail;
pub mod search;

pub use detail::{
    BenchmarkDetail, CollectionDetail, DatasetDetail, FlowDetail, MeasureDetail, RunDetail,
    TaskDetail, UserProfile,
};
pub use search::{
    BenchmarkSearch, CollectionSearch, DatasetSearch, FlowSearch, MeasureSearch, RunSearch,
    TaskSearch, UserSearch,
};
