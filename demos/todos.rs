use std::fmt;

use http_endpoint::{with_header, with_json_receivers, with_path_param, Endpoint, Receiver};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Todo {
    id: u32,
    user_id: u32,
    title: String,
    completed: bool,
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(id={}, userID={}, title={:?}, completed={})",
            self.id, self.user_id, self.title, self.completed
        )
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let todos = Endpoint::new(
        "https://jsonplaceholder.typicode.com/todos",
        [with_header("Accept", ["application/json"])],
    );
    let todo = Endpoint::new("https://jsonplaceholder.typicode.com/todos/{id}", []);

    let mut all: Vec<Todo> = Vec::new();
    todos.get([with_json_receivers(&mut all, Receiver::none())])?;
    for t in all.iter().take(5) {
        println!("{t}");
    }

    let mut first: Option<Todo> = None;
    let resp = todo.get([with_path_param("id", 1), with_json_receivers(&mut first, Receiver::none())])?;
    println!("GET {} -> {} {}", resp.url, resp.status, resp.status_text);
    if let Some(t) = first {
        println!("{t}");
    }

    Ok(())
}
