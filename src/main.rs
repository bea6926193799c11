use anyhow::anyhow;
use ltc::cli::factory::make_command_groups;
use ltc::cli::App;
use ltc::config::{config_file_location, config_root, FilePersister, Store};
use ltc::exit::{spawn_listener, ExitHandler, Interrupt};
use std::env;
use std::io;
use std::process;
use std::sync::{mpsc, Arc, Mutex};
use tracing::Level;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> ltc::Result<()> {
    let root = config_root();
    let store = Store::new(Box::new(FilePersister::new(config_file_location(&root))))?;
    let store = Arc::new(Mutex::new(store));

    let (interrupts, shutdown) = mpsc::channel::<Interrupt>();
    let exit_handler = Arc::new(ExitHandler::new(Box::new(|code| process::exit(code))));
    let _listener = spawn_listener(Arc::clone(&exit_handler), shutdown);
    ctrlc::set_handler(move || {
        let _ = interrupts.send(Interrupt);
    })
    .map_err(|e| anyhow!("failed to install interrupt handler: {}", e))?;

    let mut app = App::new(
        ltc::VERSION,
        make_command_groups(store),
        Box::new(io::stdout()),
    );

    let args: Vec<String> = env::args().collect();
    app.run(&args)
}

fn init_logging() {
    let level = if matches!(env::var("LTC_LOG_LEVEL").as_deref(), Ok("DEBUG")) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
