use super::{ResourceKind, Session, generate, list, relocate};
use crate::prompt::{self, GenerateMenu, ListMenu, MainMenu, MoveMenu};
use crate::ui;
use inquire::error::InquireResult;

/// Esc inside an action returns to the menu it was started from; other
/// failures are printed and the menu comes back.
fn settle(result: InquireResult<()>) -> InquireResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if prompt::is_cancel(&err) => Ok(()),
        Err(err @ inquire::InquireError::OperationInterrupted) => Err(err),
        Err(err) => {
            ui::error(err);
            Ok(())
        }
    }
}

fn back_on_cancel<T>(choice: InquireResult<T>, back: T) -> InquireResult<T> {
    match choice {
        Err(err) if prompt::is_cancel(&err) => Ok(back),
        other => other,
    }
}

pub fn main_menu(session: &Session) -> InquireResult<()> {
    loop {
        ui::header("AR MOVER");

        match back_on_cancel(prompt::choose("Main Menu", &MainMenu::ALL), MainMenu::Exit)? {
            MainMenu::Generate => generate_menu(session)?,
            MainMenu::Move => move_menu(session)?,
            MainMenu::List => list_menu(session)?,
            MainMenu::Exit => {
                println!("Exiting AR MOVER. Goodbye!");
                return Ok(());
            }
        }
    }
}

pub fn generate_menu(session: &Session) -> InquireResult<()> {
    loop {
        let kind = match back_on_cancel(
            prompt::choose("Generate Resource Menu", &GenerateMenu::ALL),
            GenerateMenu::Back,
        )? {
            GenerateMenu::FunctionApp => ResourceKind::FunctionApp,
            GenerateMenu::ResourceGroup => ResourceKind::ResourceGroup,
            GenerateMenu::Back => return Ok(()),
        };

        settle(generate::handle(session, kind))?;
    }
}

pub fn move_menu(session: &Session) -> InquireResult<()> {
    loop {
        let result = match back_on_cancel(
            prompt::choose("Move Resources Menu", &MoveMenu::ALL),
            MoveMenu::Back,
        )? {
            MoveMenu::MoveFunctionApp => relocate::move_functionapp(session),
            MoveMenu::DeleteFunctionApp => relocate::delete_functionapp(session),
            MoveMenu::Back => return Ok(()),
        };

        settle(result)?;
    }
}

pub fn list_menu(session: &Session) -> InquireResult<()> {
    loop {
        let target = match back_on_cancel(
            prompt::choose("List Resources Menu", &ListMenu::ALL),
            ListMenu::Back,
        )? {
            ListMenu::FunctionApps => super::ListTarget::FunctionApps,
            ListMenu::ResourceGroups => super::ListTarget::Groups,
            ListMenu::Subscriptions => super::ListTarget::Subscriptions,
            ListMenu::Back => return Ok(()),
        };

        settle(list::handle(session, target))?;
    }
}
