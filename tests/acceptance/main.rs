use cucumber::World;
use std::path::PathBuf;
use wiremock::MockServer;

#[derive(Default, World)]
pub struct ReportWorld {
    pub server: Option<MockServer>,
    pub workdir: Option<tempfile::TempDir>,
    pub template_path: Option<PathBuf>,
    pub captured_output: Vec<u8>,
    pub report_result: Option<Result<(), anyhow::Error>>,
}

impl std::fmt::Debug for ReportWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportWorld")
            .field("server", &self.server.as_ref().map(MockServer::uri))
            .field("template_path", &self.template_path)
            .field("captured_output", &String::from_utf8_lossy(&self.captured_output))
            .field("report_result", &self.report_result)
            .finish()
    }
}

#[tokio::main]
async fn main() {
    ReportWorld::cucumber().run_and_exit("features").await;
}
