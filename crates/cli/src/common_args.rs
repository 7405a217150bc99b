use clap::Arg;
use clap::ArgAction::{Append, SetTrue};
use keebtrack_inventory::Category;

pub fn yes() -> Arg {
    Arg::new("force")
        .long("yes")
        .short('y')
        .action(SetTrue)
        .help("Assume \"yes\" as answer to all prompts and run non-interactively")
}

pub fn fields() -> Arg {
    Arg::new("field")
        .long("field")
        .short('f')
        .action(Append)
        .value_name("NAME=VALUE")
        .help("Set a form field, e.g. `--field Name=\"Gateron Yellow\"`; prompts for every field when omitted")
}

pub fn category() -> Arg {
    Arg::new("category")
        .value_parser(clap::value_parser!(Category))
        .help("The category: case, switch, stab, keycap or keyboard")
}

/// Values of every `--field` occurrence, in order.
pub fn get_fields(args: &clap::ArgMatches) -> Vec<&str> {
    args.get_many::<String>("field")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default()
}
