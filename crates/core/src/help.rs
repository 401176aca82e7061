//! `/help` rendering over a neutral command catalog.
//!
//! The bot crate builds the catalog from its registered commands, so the
//! help text can never drift from what is actually registered.

use crate::embed::EmbedView;

/// A registered command as shown in the help menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: String,
    pub description: String,
    /// Commands without a category are reachable via `/help <name>` but
    /// are not listed in the overview.
    pub category: Option<String>,
    pub params: Vec<ParamInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl CommandInfo {
    /// `/name <required> [optional]`
    pub fn usage(&self) -> String {
        let mut usage = format!("/{}", self.name);
        for param in &self.params {
            if param.required {
                usage.push_str(&format!(" <{}>", param.name));
            } else {
                usage.push_str(&format!(" [{}]", param.name));
            }
        }
        usage
    }
}

/// Look a command up by name, ignoring case and a leading `/`.
pub fn find_command<'a>(commands: &'a [CommandInfo], query: &str) -> Option<&'a CommandInfo> {
    let wanted = query.trim().trim_start_matches('/');
    commands
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(wanted))
}

/// Add the help body to `base`.
///
/// Without a query, lists every categorized command grouped by category
/// (in registration order). With a query, shows the description, usage
/// and parameters of that one command.
pub fn help_embed(base: EmbedView, commands: &[CommandInfo], query: Option<&str>) -> EmbedView {
    match query {
        None => overview(base, commands),
        Some(query) => match find_command(commands, query) {
            Some(command) => details(base, command),
            None => base.field(
                "Command not found",
                "No such command was found. Please check the name and try again.",
                false,
            ),
        },
    }
}

fn overview(mut embed: EmbedView, commands: &[CommandInfo]) -> EmbedView {
    let mut categories: Vec<(&str, Vec<String>)> = Vec::new();
    for command in commands {
        let Some(category) = command.category.as_deref() else {
            continue;
        };
        let line = format!("`/{}` - {}", command.name, command.description);
        match categories.iter_mut().find(|(name, _)| *name == category) {
            Some((_, lines)) => lines.push(line),
            None => categories.push((category, vec![line])),
        }
    }

    for (category, lines) in categories {
        embed = embed.field(category, lines.join("\n"), false);
    }

    embed.field(
        "Command Details",
        "Use `/help <command>` to get detailed info about a specific command.",
        false,
    )
}

fn details(embed: EmbedView, command: &CommandInfo) -> EmbedView {
    let embed = embed.field(
        format!("Command: /{}", command.name),
        format!(
            "**Description:** {}\n**Usage:** `{}`",
            command.description,
            command.usage()
        ),
        false,
    );

    if command.params.is_empty() {
        return embed;
    }

    let params = command
        .params
        .iter()
        .map(|param| format!("`{}`: {}", param.name, param.description))
        .collect::<Vec<_>>()
        .join("\n");
    embed.field("Parameters", params, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CommandInfo> {
        vec![
            CommandInfo {
                name: "hotlap".to_string(),
                description: "Shows the top 10 fastest hotlap times (PS3 only)".to_string(),
                category: Some("Leaderboard".to_string()),
                params: vec![],
            },
            CommandInfo {
                name: "player".to_string(),
                description: "Shows information about a player.".to_string(),
                category: Some("Players".to_string()),
                params: vec![ParamInfo {
                    name: "username".to_string(),
                    description: "The username of the player you want to view.".to_string(),
                    required: true,
                }],
            },
            CommandInfo {
                name: "leaderboard".to_string(),
                description: "Shows a leaderboard page.".to_string(),
                category: Some("Leaderboard".to_string()),
                params: vec![ParamInfo {
                    name: "page".to_string(),
                    description: "Page number.".to_string(),
                    required: false,
                }],
            },
            CommandInfo {
                name: "help".to_string(),
                description: "Displays the help menu.".to_string(),
                category: None,
                params: vec![],
            },
        ]
    }

    #[test]
    fn overview_groups_by_category_in_registration_order() {
        let embed = help_embed(EmbedView::new("Help", 0), &catalog(), None);
        let names: Vec<_> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Leaderboard", "Players", "Command Details"]);
        assert_eq!(
            embed.fields[0].value,
            "`/hotlap` - Shows the top 10 fastest hotlap times (PS3 only)\n\
             `/leaderboard` - Shows a leaderboard page."
        );
    }

    #[test]
    fn details_show_usage_and_parameters() {
        let embed = help_embed(EmbedView::new("Help", 0), &catalog(), Some("/Player"));
        assert_eq!(embed.fields[0].name, "Command: /player");
        assert_eq!(
            embed.fields[0].value,
            "**Description:** Shows information about a player.\n**Usage:** `/player <username>`"
        );
        assert_eq!(embed.fields[1].name, "Parameters");
        assert_eq!(
            embed.fields[1].value,
            "`username`: The username of the player you want to view."
        );
    }

    #[test]
    fn uncategorized_commands_are_still_documented() {
        let embed = help_embed(EmbedView::new("Help", 0), &catalog(), Some("help"));
        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].name, "Command: /help");
    }

    #[test]
    fn optional_parameters_use_brackets() {
        let commands = catalog();
        let leaderboard = find_command(&commands, "leaderboard").unwrap();
        assert_eq!(leaderboard.usage(), "/leaderboard [page]");
    }

    #[test]
    fn unknown_command() {
        let embed = help_embed(EmbedView::new("Help", 0), &catalog(), Some("warp"));
        assert_eq!(embed.fields[0].name, "Command not found");
    }
}
