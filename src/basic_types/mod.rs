mod model_error;
mod propagation_status;
mod pruning;

pub use model_error::ModelError;
pub use propagation_status::Inconsistency;
pub use propagation_status::Propagation;
pub use propagation_status::PropagationStatus;
pub use pruning::Pruning;

pub(crate) type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub(crate) type HashSet<K> = fnv::FnvHashSet<K>;
