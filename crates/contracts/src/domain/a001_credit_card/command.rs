/// Every action the form exposes.
///
/// `Edit`, `Update`, `Delete`, `Cancel`, `SearchCity` and `Exit` are rendered
/// but have no behaviour yet: dispatching them only logs and changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormCommand {
    Next,
    Prev,
    Browse,
    New,
    Save,
    Edit,
    Update,
    Delete,
    SearchCity,
    Cancel,
    Exit,
}

impl FormCommand {
    /// Buttons of the right-hand action column, top to bottom
    pub const ACTION_PANEL: [FormCommand; 9] = [
        FormCommand::Browse,
        FormCommand::New,
        FormCommand::Save,
        FormCommand::Edit,
        FormCommand::Update,
        FormCommand::Delete,
        FormCommand::Cancel,
        FormCommand::SearchCity,
        FormCommand::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormCommand::Next => "Next",
            FormCommand::Prev => "Prev",
            FormCommand::Browse => "Browse",
            FormCommand::New => "New",
            FormCommand::Save => "Save",
            FormCommand::Edit => "Edit",
            FormCommand::Update => "Update",
            FormCommand::Delete => "Delete",
            FormCommand::SearchCity => "Search City",
            FormCommand::Cancel => "Cancel",
            FormCommand::Exit => "Exit",
        }
    }

    /// Icon name for the action button
    pub fn icon(self) -> &'static str {
        match self {
            FormCommand::Next => "chevron-right",
            FormCommand::Prev => "chevron-left",
            FormCommand::Browse => "folder",
            FormCommand::New => "plus",
            FormCommand::Save => "save",
            FormCommand::Edit => "edit",
            FormCommand::Update => "refresh",
            FormCommand::Delete => "trash",
            FormCommand::SearchCity => "search",
            FormCommand::Cancel => "x",
            FormCommand::Exit => "log-out",
        }
    }

    /// False for commands whose handler is a documented no-op
    pub fn is_wired(self) -> bool {
        matches!(
            self,
            FormCommand::Next
                | FormCommand::Prev
                | FormCommand::Browse
                | FormCommand::New
                | FormCommand::Save
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_panel_has_nine_buttons() {
        assert_eq!(FormCommand::ACTION_PANEL.len(), 9);
        assert_eq!(FormCommand::ACTION_PANEL[0], FormCommand::Browse);
        assert!(!FormCommand::ACTION_PANEL.contains(&FormCommand::Next));

        let labels: Vec<_> = FormCommand::ACTION_PANEL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Browse", "New", "Save", "Edit", "Update", "Delete", "Cancel", "Search City", "Exit"]
        );
    }

    #[test]
    fn test_wired_commands() {
        let wired: Vec<_> = FormCommand::ACTION_PANEL
            .iter()
            .filter(|c| c.is_wired())
            .map(|c| c.label())
            .collect();
        assert_eq!(wired, vec!["Browse", "New", "Save"]);
        assert!(!FormCommand::SearchCity.is_wired());
        assert_eq!(FormCommand::SearchCity.label(), "Search City");
    }
}
