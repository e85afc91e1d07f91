use std::env;

use log::debug;

use souschef::{App, AppConfig, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the search query from command-line arguments
    let args: Vec<String> = env::args().collect();
    let query = args
        .get(1)
        .ok_or("Please provide a search query as an argument")?;

    let config = AppConfig::load().unwrap_or_default();
    let mut app = App::new(&config)?;

    app.dispatch(Command::Search(query.clone()))?;
    let first_id = match app.search_results().first() {
        Some(hit) => hit.id.clone(),
        None => {
            println!("No recipes found for {query:?}");
            return Ok(());
        }
    };
    debug!("opening first result {first_id}");

    app.dispatch(Command::OpenRecipe(first_id))?;
    let recipe = app.current_recipe().ok_or("recipe did not open")?;

    println!("{} — {}", recipe.title, recipe.publisher);
    println!("{} servings, about {} minutes", recipe.servings, recipe.time_minutes);
    for ing in &recipe.ingredients {
        if ing.unit.is_empty() {
            println!("  {:>6.2}  {}", ing.quantity, ing.name);
        } else {
            println!("  {:>6.2} {} {}", ing.quantity, ing.unit, ing.name);
        }
    }

    Ok(())
}
