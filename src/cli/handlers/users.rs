//! User management handlers: login, register, reset and users

use crate::cli::{Command, State};
use crate::database::{CreateUserParams, User};
use crate::error::{Error, Result};
use tracing::debug;

/// The one argument a command expects, usually a username
fn single_argument<'a>(cmd: &'a Command, what: &str) -> Result<&'a str> {
    match cmd.args.as_slice() {
        [value] => Ok(value.as_str()),
        _ => Err(Error::invalid_arguments(format!(
            "the {} handler expects a single argument, {}",
            cmd.name, what
        ))),
    }
}

fn no_arguments(cmd: &Command) -> Result<()> {
    if cmd.args.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_arguments(format!(
            "the {} handler takes no arguments",
            cmd.name
        )))
    }
}

/// Lines printed by `users`, marking the current user
pub fn user_lines(users: &[User], current_user_name: &str) -> Vec<String> {
    users
        .iter()
        .map(|user| {
            if user.name == current_user_name {
                format!("* {} (current)", user.name)
            } else {
                format!("* {}", user.name)
            }
        })
        .collect()
}

pub fn handle_login(state: &mut State, cmd: &Command) -> Result<()> {
    let name = single_argument(cmd, "the username")?;

    state.store.get_user(name)?;
    state.set_current_user(name)?;

    println!("User has been updated!");
    Ok(())
}

pub fn handle_register(state: &mut State, cmd: &Command) -> Result<()> {
    let name = single_argument(cmd, "the username")?;

    if state.store.find_user(name)?.is_some() {
        return Err(Error::user_already_exists(name));
    }

    let user = state.store.create_user(CreateUserParams::new(name))?;
    debug!("Registered {} as {}", user.name, user.id);
    state.set_current_user(name)?;

    println!("user: {} was added", name);
    Ok(())
}

pub fn handle_reset(state: &mut State, cmd: &Command) -> Result<()> {
    no_arguments(cmd)?;

    let deleted = state.store.delete_all_users()?;
    debug!("Reset removed {} users", deleted);

    println!("Users database has been reset");
    Ok(())
}

pub fn handle_users(state: &mut State, cmd: &Command) -> Result<()> {
    no_arguments(cmd)?;

    let users = state.store.list_users()?;
    for line in user_lines(&users, &state.config.current_user_name) {
        println!("{}", line);
    }

    Ok(())
}
