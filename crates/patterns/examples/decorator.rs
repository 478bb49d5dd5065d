use micro_patterns::decorator::menu::{chocolate, espresso, ice_cream, milk, vanila, whip};
use micro_patterns::decorator::{Item, ItemExt, Menu, Snapshot};
use tracing::{error, info};

fn print_item(name: &str, item: &impl Item) {
    println!("{name} cost = {}", item.cost());
    println!("{name} ingredients - {}", item.label());
}

fn main() {
    micro_patterns::init_tracing().expect("setting default subscriber failed");

    let espresso = espresso();
    let capuccino = (&espresso).with(milk()).with(whip());
    let capuccino_with_chocolate = (&capuccino).with(chocolate());

    print_item("Espresso", &espresso);
    print_item("Capuccino", &capuccino);
    print_item("Capuccino with chocolate", &capuccino_with_chocolate);

    println!();
    let ice_cream = ice_cream();
    print_item("Chocolate ice cream", &(&ice_cream).with(chocolate()));
    print_item("Vanila ice cream", &(&ice_cream).with(vanila()));

    println!();
    let menu = match std::env::args().nth(1) {
        Some(path) => Menu::from_path(path),
        None => Menu::builtin(),
    };
    let menu = match menu {
        Ok(menu) => menu,
        Err(e) => {
            error!(cause = %e, "failed to load menu");
            return;
        }
    };

    for name in menu.order_names() {
        match menu.order(name) {
            Ok(chain) => {
                info!(order = name, depth = chain.depth(), "serving order");
                for (stage, Snapshot { cost, label }) in chain.stages().iter().enumerate() {
                    println!("{name} #{stage}: {label} = {cost}");
                }
                match chain.transcript_json() {
                    Ok(json) => println!("{name} transcript: {json}"),
                    Err(e) => error!(order = name, cause = %e, "failed to encode transcript"),
                }
            }
            Err(e) => error!(order = name, cause = %e, "failed to build order"),
        }
    }
}
