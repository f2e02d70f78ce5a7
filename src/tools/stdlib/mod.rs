//! Builtin editing vocabulary

pub mod editing;
pub mod marking;
pub mod movement;
pub mod position;
pub mod search;
pub mod strings;

use crate::tools::Tool;
use std::sync::Arc;

/// Every builtin, in one explicit table
pub fn all_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        // Movement
        Arc::new(movement::ForwardCharTool),
        Arc::new(movement::BackwardCharTool),
        Arc::new(movement::ForwardWordTool),
        Arc::new(movement::BackwardWordTool),
        Arc::new(movement::GotoCharTool),
        Arc::new(movement::GotoLineTool),
        Arc::new(movement::BeginningOfLineTool),
        Arc::new(movement::EndOfLineTool),
        Arc::new(movement::BeginningOfBufferTool),
        Arc::new(movement::EndOfBufferTool),
        // Position queries
        Arc::new(position::PointTool),
        Arc::new(position::MarkTool),
        Arc::new(position::PointMinTool),
        Arc::new(position::PointMaxTool),
        Arc::new(position::BufferSizeTool),
        Arc::new(position::CurrentColumnTool),
        Arc::new(position::LineNumberAtPosTool),
        Arc::new(position::RegionBeginningTool),
        Arc::new(position::RegionEndTool),
        // Mark
        Arc::new(marking::SetMarkTool),
        Arc::new(marking::SetMarkCommandTool),
        Arc::new(marking::ExchangePointAndMarkTool),
        Arc::new(marking::MarkWholeBufferTool),
        Arc::new(marking::MarkWordTool),
        Arc::new(marking::MarkLineTool),
        // Editing
        Arc::new(editing::InsertTool),
        Arc::new(editing::DeleteCharTool),
        Arc::new(editing::DeleteBackwardCharTool),
        Arc::new(editing::DeleteRegionTool),
        Arc::new(editing::ReplaceRegionTool),
        Arc::new(editing::DeleteLineTool),
        Arc::new(editing::KillLineTool),
        Arc::new(editing::KillWordTool),
        Arc::new(editing::BackwardKillWordTool),
        Arc::new(editing::BufferSubstringTool),
        // Search
        Arc::new(search::SearchForwardTool),
        Arc::new(search::SearchBackwardTool),
        Arc::new(search::ReSearchForwardTool),
        Arc::new(search::ReSearchBackwardTool),
        Arc::new(search::ReplaceMatchTool),
        Arc::new(search::LookingAtTool),
        Arc::new(search::LookingBackTool),
        // Strings
        Arc::new(strings::ConcatTool),
        Arc::new(strings::SubstringTool),
        Arc::new(strings::LengthTool),
        Arc::new(strings::UpcaseTool),
        Arc::new(strings::DowncaseTool),
        Arc::new(strings::CapitalizeTool),
        Arc::new(strings::StringMatchTool),
        Arc::new(strings::ReplaceRegexpInStringTool),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::documentation;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let tools = all_tools();
        let names: HashSet<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), tools.len());
        assert_eq!(tools.len(), 50);
    }

    #[test]
    fn test_every_builtin_is_documented() {
        for tool in all_tools() {
            assert!(
                documentation::lookup(tool.name()).is_some(),
                "{} has no documentation",
                tool.name()
            );
            assert!(!tool.description().is_empty());
        }
        assert_eq!(documentation::count(), all_tools().len());
    }
}
