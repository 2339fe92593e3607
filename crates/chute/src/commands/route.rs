use clap::ArgMatches;
use tracing::info;

use chute_core::Route;

pub(crate) fn handle_route_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = matches
        .get_one::<String>("path")
        .ok_or("Path argument is required")?;
    let json_output = matches.get_flag("json");

    let route = Route::from_path(path);
    let redirected = route.path() != path;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "path": path,
                "route": route.path(),
                "view": route.view_name(),
                "redirected": redirected,
            }))?
        );
    } else if redirected {
        println!("{} -> {} ({}, redirected)", path, route.path(), route.view_name());
    } else {
        println!("{} -> {}", path, route.view_name());
    }

    info!(
        event = "cli.route_completed",
        path = path.as_str(),
        route = route.path(),
        redirected = redirected
    );
    Ok(())
}
