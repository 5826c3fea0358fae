use rackpack::io::ext_repr::{ExtInstance, ExtSolution};
use rackpack::util::PackConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct Output {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: PackConfig,
}
