//! Shared fixtures for unit tests.

use std::collections::HashMap;

use crate::item::{Interaction, Item, Transform};
use crate::objective::Objective;
use crate::player::Player;
use crate::room::{Blocker, Room};
use crate::vocabulary::Vocabulary;
use crate::world::GameWorld;

pub fn test_vocabulary() -> Vocabulary {
    let tables: Vec<(&str, Vec<&str>)> = vec![
        ("move_requests", vec!["move", "go", "walk"]),
        ("look_requests", vec!["look", "look around"]),
        ("take_requests", vec!["take", "grab", "pick up"]),
        ("drop_requests", vec!["drop", "put down"]),
        ("exit_requests", vec!["exit", "quit"]),
        ("inspect_requests", vec!["inspect", "examine", "look at"]),
        ("save_requests", vec!["save", "savegame"]),
        ("load_requests", vec!["load", "loadgame"]),
        ("new_game_requests", vec!["new", "newgame"]),
        ("inventory_requests", vec!["inventory", "i"]),
        ("game_story_requests", vec!["wax lyrical"]),
        ("help_requests", vec!["help"]),
        ("use_requests", vec!["use"]),
        ("chew_requests", vec!["chew", "bite"]),
        ("pull_requests", vec!["pull", "yank"]),
        ("objective_requests", vec!["objectives"]),
        ("alias", vec!["alias", "synonyms"]),
        ("sit_requests", vec!["sit"]),
        ("scroll_requests", vec!["scroll"]),
        ("clean_requests", vec!["clean", "wipe"]),
        ("drink_requests", vec!["drink"]),
        ("hints", vec!["hint"]),
        ("game_map", vec!["map"]),
        ("climb_requests", vec!["climb"]),
        ("turn_on_requests", vec!["turn on", "switch on"]),
        ("open_requests", vec!["open"]),
        ("play_requests", vec!["play"]),
        ("flush_requests", vec!["flush"]),
        ("draw_requests", vec!["draw"]),
        ("move_north", vec!["north", "n"]),
        ("move_south", vec!["south", "s"]),
        ("move_east", vec!["east", "e"]),
        ("move_west", vec!["west", "w"]),
        ("yes_words", vec!["yes", "y"]),
        ("fast_words", vec!["fast", "quick"]),
        ("medium_words", vec!["medium", "normal"]),
        ("slow_words", vec!["slow"]),
        ("off_words", vec!["off"]),
        ("words_to_remove", vec!["the", "a", "an", "to", "with", "please"]),
    ];
    Vocabulary::from_tables(tables, vec!["look - describe the room".into(), "take <item>".into()])
}

fn room(name: &str, exits: &[&str]) -> Room {
    Room {
        name: name.into(),
        description: vec![("intro".into(), format!("You are in the {name}."))],
        short_description: format!("The {name}."),
        exits: exits.iter().map(|s| (*s).to_string()).collect(),
        ..Room::default()
    }
}

fn item(name: &str, collectible: bool) -> Item {
    Item {
        name: name.into(),
        description: vec![format!("A perfectly ordinary {name}.")],
        is_collectible: collectible,
        ..Item::default()
    }
}

/// Hallway (start) with a lamp; kitchen east with a fork, key and drawer; a
/// cellar south that stays dark until the torch is found; an unconnected attic.
pub fn test_world() -> GameWorld {
    let mut hallway = room("hallway", &["kitchen", "cellar"]);
    hallway.aliases = vec!["hall".into()];
    hallway.directional_exits = HashMap::from([
        ("east".to_string(), "kitchen".to_string()),
        ("south".to_string(), "cellar".to_string()),
    ]);
    hallway.inventory = vec!["lamp".into()];

    let mut kitchen = room("kitchen", &["hallway"]);
    kitchen.directional_exits = HashMap::from([("west".to_string(), "hallway".to_string())]);
    kitchen.description.push(("fork".into(), "A fork glints on the counter.".into()));
    kitchen.inventory = vec!["fork".into(), "key".into(), "drawer".into()];
    kitchen.starting_inventory = vec!["fork".into(), "key".into()];

    let mut cellar = room("cellar", &["hallway"]);
    cellar.blockers = vec![Blocker {
        name: "find torch".into(),
        message: "It is far too dark to go down there.".into(),
    }];

    let attic = room("attic", &[]);

    let mut lamp = item("lamp", false);
    lamp.interactions.insert(
        "turn on".into(),
        Interaction {
            message: "The lamp buzzes to life.".into(),
            new_description: Some(vec!["A lamp, glowing warmly.".into()]),
            ..Interaction::default()
        },
    );

    let mut fork = item("fork", true);
    fork.alias = vec!["utensil".into()];
    fork.look_at_message = vec![
        ("fork".into(), "Four tines, slightly bent.".into()),
        ("key".into(), "Something small is wedged between the tines.".into()),
        ("list_find torch".into(), "[-] Find a torch".into()),
    ];
    fork.interactions.insert(
        "use_with".into(),
        Interaction {
            message: "You pry the drawer open with the fork.".into(),
            unhides: vec!["torch".into()],
            ..Interaction::default()
        },
    );

    let mut key = item("key", true);
    key.locked = true;

    let mut drawer = item("drawer", false);
    drawer.interactions.insert(
        "open".into(),
        Interaction {
            message: "Inside the drawer you find a torch.".into(),
            transforms: vec![Transform {
                from: None,
                to: Some("torch".into()),
            }],
            ..Interaction::default()
        },
    );
    drawer.interactions.insert(
        "pull".into(),
        Interaction {
            message: "The drawer rattles.".into(),
            requires: vec!["fork".into()],
            ..Interaction::default()
        },
    );
    drawer.interactions.insert(
        "use_with".into(),
        Interaction {
            message: "The drawer gives way.".into(),
            ..Interaction::default()
        },
    );

    let mut torch = item("torch", true);
    torch.hidden = true;

    let objective = Objective {
        name: "find torch".into(),
        hints: vec![
            "The kitchen looks promising.".into(),
            "Drawers often hide things.".into(),
            "Open the drawer.".into(),
        ],
        requires: vec!["torch".into()],
        ..Objective::default()
    };

    let player = Player {
        name: "Tester".into(),
        location: "hallway".into(),
        visited_rooms: vec!["hallway".into()],
        ..Player::default()
    };

    GameWorld::new(
        vec![hallway, kitchen, cellar, attic],
        vec![lamp, fork, key, drawer, torch],
        player,
        vec![objective],
    )
}
