pub mod api;

use crate::cli::Args;
use crate::companion::CompanionService;
use std::error::Error;

pub struct Server {
    service: CompanionService,
    args: Args,
}

impl Server {
    pub fn new(service: CompanionService, args: Args) -> Self {
        Self { service, args }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(self.service, self.args).await
    }
}
