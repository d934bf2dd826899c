use clap::Parser;
use mazepath::colors::ColorScheme;
use mazepath::display::{display_search_info, display_search_results};
use mazepath::json_output::{create_json_output, print_json_output};
use mazepath::logging::init_logging;
use mazepath::*;
use std::error::Error;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = run(&args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = MazeApp::new(&args.maze_file)?;
    let maze = app.load_maze()?;

    let results = execute_searches(&maze, &args.algorithm.algorithms());

    if args.json {
        let json_outputs: Vec<_> = results
            .iter()
            .map(|result| create_json_output(result, &app.maze_path, &maze))
            .collect();
        print_json_output(&json_outputs);
        return Ok(());
    }

    if args.verbose {
        display_search_info(&app.maze_path, &maze, colors);
        println!("🔍 Searching...\n");
    }

    for result in &results {
        display_search_results(result, &maze, args, colors);
    }

    Ok(())
}
