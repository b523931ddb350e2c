use env_logger::{Builder, Target};

pub fn initialize_logger() -> bool {
    let mut builder = Builder::new();
    builder.target(Target::Stdout);
    builder.filter(None, log::LevelFilter::Info);
    builder.parse_default_env();
    builder.try_init().is_ok()
}
