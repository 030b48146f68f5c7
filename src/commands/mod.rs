//! User-invocable actions and the registry a host exposes them through.

use crate::inline::find_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    GenerateNewsSummary,
    SummarizeUrlInline,
}

impl CommandId {
    pub fn id(&self) -> &'static str {
        match self {
            CommandId::GenerateNewsSummary => "generate-news-summary",
            CommandId::SummarizeUrlInline => "summarize-url-inline",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CommandId::GenerateNewsSummary => "Generate Today's News Summary",
            CommandId::SummarizeUrlInline => "Summarize URL Inline",
        }
    }

    /// Whether the command may run for the given selection.
    pub fn is_available(&self, selection: Option<&str>) -> bool {
        match self {
            CommandId::GenerateNewsSummary => true,
            CommandId::SummarizeUrlInline => selection.and_then(find_url).is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: CommandId,
    pub title: &'static str,
    /// Also offered from the editor context menu.
    pub in_context_menu: bool,
}

/// Host capability for exposing commands to the user.
pub trait CommandRegistry {
    fn register(&mut self, spec: CommandSpec);
}

/// Register every command this crate provides.
pub fn register_commands(registry: &mut dyn CommandRegistry) {
    registry.register(CommandSpec {
        id: CommandId::GenerateNewsSummary,
        title: CommandId::GenerateNewsSummary.title(),
        in_context_menu: true,
    });
    registry.register(CommandSpec {
        id: CommandId::SummarizeUrlInline,
        title: CommandId::SummarizeUrlInline.title(),
        in_context_menu: true,
    });
}

/// Registry that simply remembers what was registered.
#[derive(Debug, Default)]
pub struct CommandList {
    specs: Vec<CommandSpec>,
}

impl CommandList {
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    pub fn get(&self, id: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|s| s.id.id() == id)
    }

    /// Commands offered in the context menu for `selection`.
    pub fn context_menu(&self, selection: Option<&str>) -> Vec<&CommandSpec> {
        self.specs
            .iter()
            .filter(|s| s.in_context_menu && s.id.is_available(selection))
            .collect()
    }
}

impl CommandRegistry for CommandList {
    fn register(&mut self, spec: CommandSpec) {
        tracing::debug!("Registered command {}", spec.id.id());
        self.specs.push(spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered() -> CommandList {
        let mut list = CommandList::default();
        register_commands(&mut list);
        list
    }

    #[test]
    fn test_both_commands_registered() {
        let list = registered();
        let ids: Vec<&str> = list.specs().iter().map(|s| s.id.id()).collect();
        assert_eq!(ids, vec!["generate-news-summary", "summarize-url-inline"]);
        assert_eq!(
            list.get("generate-news-summary").unwrap().title,
            "Generate Today's News Summary"
        );
    }

    #[test]
    fn test_inline_requires_url_in_selection() {
        assert!(CommandId::SummarizeUrlInline.is_available(Some("read https://a.b/c")));
        assert!(!CommandId::SummarizeUrlInline.is_available(Some("no link")));
        assert!(!CommandId::SummarizeUrlInline.is_available(None));
        assert!(CommandId::GenerateNewsSummary.is_available(None));
    }

    #[test]
    fn test_context_menu_filters_by_selection() {
        let list = registered();

        let without_url = list.context_menu(Some("plain text"));
        assert_eq!(without_url.len(), 1);
        assert_eq!(without_url[0].id, CommandId::GenerateNewsSummary);

        assert_eq!(list.context_menu(Some("http://x.y")).len(), 2);
    }
}
