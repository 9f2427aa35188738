mod cli;
mod handlers;
mod vcf;

use handlers::AnnotateOptions;

fn main() {
    let matches = cli::build_parser().get_matches();
    let opts = AnnotateOptions::from_matches(&matches);

    match handlers::run_annotate(&opts) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}
