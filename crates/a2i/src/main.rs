fn main() {
    a2i_cli::init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to start async runtime: {err}");
            std::process::exit(1);
        }
    };

    let code = runtime.block_on(a2i_cli::run(std::env::args().collect()));
    std::process::exit(code);
}
