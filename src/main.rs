use docbooth::app::App;
use docbooth::launch::LaunchConfig;
use docbooth::store::Database;
use docbooth::viewer::ViewerApp;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    tracing_subscriber::fmt::init();
    color_eyre::install()?;

    // Whether this process is the dashboard or a launched viewer is decided
    // once, from the hand-off string, before any UI exists.
    let config = LaunchConfig::from_args(std::env::args().skip(1));
    let database = Database::open_default()?;

    let terminal = ratatui::init();
    let result = match config.view_target() {
        Some(file_id) => ViewerApp::new(database, file_id).await.run(terminal).await,
        None => App::new(database).run(terminal).await,
    };
    ratatui::restore();
    result
}
