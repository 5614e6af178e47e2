use attendance::cli;
use attendance::telemetry;

#[actix_web::main]
async fn main() {
    telemetry::init_cli_logging();

    cli::run(cli::parse_args(std::env::args_os())).await;
}
