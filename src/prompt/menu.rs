use inquire::{Select, error::InquireResult};
use std::fmt;

pub fn choose<T: Copy + fmt::Display>(title: &str, items: &[T]) -> InquireResult<T> {
    Select::new(title, items.to_vec()).prompt()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    Generate,
    Move,
    List,
    Exit,
}

impl MainMenu {
    pub const ALL: [MainMenu; 4] = [MainMenu::Generate, MainMenu::Move, MainMenu::List, MainMenu::Exit];
}

impl fmt::Display for MainMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MainMenu::Generate => "1. Generate Resource",
            MainMenu::Move => "2. Move Resources",
            MainMenu::List => "3. List Resources in Subscription",
            MainMenu::Exit => "4. Exit",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMenu {
    FunctionApp,
    ResourceGroup,
    Back,
}

impl GenerateMenu {
    pub const ALL: [GenerateMenu; 3] = [
        GenerateMenu::FunctionApp,
        GenerateMenu::ResourceGroup,
        GenerateMenu::Back,
    ];
}

impl fmt::Display for GenerateMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GenerateMenu::FunctionApp => "1. Generate Function App Name",
            GenerateMenu::ResourceGroup => "2. Generate Resource Group Name",
            GenerateMenu::Back => "3. Back to Main Menu",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMenu {
    MoveFunctionApp,
    DeleteFunctionApp,
    Back,
}

impl MoveMenu {
    pub const ALL: [MoveMenu; 3] = [
        MoveMenu::MoveFunctionApp,
        MoveMenu::DeleteFunctionApp,
        MoveMenu::Back,
    ];
}

impl fmt::Display for MoveMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveMenu::MoveFunctionApp => "1. Move Function App",
            MoveMenu::DeleteFunctionApp => "2. Delete Function App",
            MoveMenu::Back => "3. Back to Main Menu",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMenu {
    FunctionApps,
    ResourceGroups,
    Subscriptions,
    Back,
}

impl ListMenu {
    pub const ALL: [ListMenu; 4] = [
        ListMenu::FunctionApps,
        ListMenu::ResourceGroups,
        ListMenu::Subscriptions,
        ListMenu::Back,
    ];
}

impl fmt::Display for ListMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListMenu::FunctionApps => "1. List Function Apps",
            ListMenu::ResourceGroups => "2. List Resource Groups",
            ListMenu::Subscriptions => "3. List Subscriptions",
            ListMenu::Back => "4. Back to Main Menu",
        })
    }
}
