use sherlock_transport_grpc::RpcChannel;

use crate::analysis::Analysis;
use crate::common::Common;
use crate::layer::Layer;
use crate::lifecycle::Lifecycle;
use crate::model::Model;
use crate::parts::Parts;
use crate::project::Project;
use crate::stackup::Stackup;
use crate::version::EngineVersion;

/// One client per engine service, all sharing a channel and version marker.
///
/// Usually obtained from [`crate::launcher::launch_sherlock`] or
/// [`crate::launcher::connect_grpc_channel`]; build it directly to run the
/// services over another [`RpcChannel`].
#[derive(Debug)]
pub struct Sherlock<C> {
    pub common: Common<C>,
    pub model: Model<C>,
    pub layer: Layer<C>,
    pub lifecycle: Lifecycle<C>,
    pub parts: Parts<C>,
    pub stackup: Stackup<C>,
    pub analysis: Analysis<C>,
    pub project: Project<C>,
    version: EngineVersion,
}

impl<C: RpcChannel> Sherlock<C> {
    pub fn new(channel: C, version: EngineVersion) -> Self {
        Self {
            common: Common::new(channel.clone(), version),
            model: Model::new(channel.clone(), version),
            layer: Layer::new(channel.clone(), version),
            lifecycle: Lifecycle::new(channel.clone(), version),
            parts: Parts::new(channel.clone(), version),
            stackup: Stackup::new(channel.clone(), version),
            analysis: Analysis::new(channel.clone(), version),
            project: Project::new(channel, version),
            version,
        }
    }

    #[must_use]
    pub const fn version(&self) -> EngineVersion {
        self.version
    }
}
