use crazycolors::app::App;
use crazycolors::error::user_friendly_message;

#[tokio::main]
async fn main() {
    let result = run().await;
    if let Err(err) = result {
        eprintln!("{}", user_friendly_message(&err));
        std::process::exit(1);
    }
}

async fn run() -> crazycolors::Result<()> {
    let mut app = App::new()?;
    app.init()?;
    let result = app.run().await;
    // Put the terminal back before reporting anything
    app.restore()?;
    result
}
