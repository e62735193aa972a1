pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(::tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // keep the output machine readable when collected by a log shipper.
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}
