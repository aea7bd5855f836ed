//! Server-side HTML views.
//!
//! The page is composed from a document layout, the index body, and the
//! todo-list partial. Mutation endpoints return only the partial, which
//! the page swaps in place.

use crate::todo::Todo;

/// Inline handlers for the toggle/delete controls. They re-fetch the
/// partial from the mutation response and swap it into the page.
const LIST_SCRIPT: &str = r#"<script>
async function sendAndRefresh(url, method) {
  const res = await fetch(url, { method });
  if (res.ok) {
    document.getElementById('todo-list').outerHTML = await res.text();
  }
}
function toggleTodo(id) { sendAndRefresh('/todos/' + id + '/toggle', 'PUT'); }
function deleteTodo(id) { sendAndRefresh('/todos/' + id, 'DELETE'); }
</script>"#;

const STYLE: &str = r#"<style>
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
section { margin-bottom: 1.5rem; }
ul { list-style: none; padding: 0; }
li { display: flex; gap: 0.5rem; align-items: center; padding: 0.25rem 0; }
li .title { flex: 1; }
.done .title { text-decoration: line-through; color: #888; }
.empty { color: #888; font-style: italic; }
</style>"#;

/// Full page: layout wrapping the index body.
pub fn index_page(open: &[Todo], done: &[Todo]) -> String {
    layout("todoboard", &index_body(open, done))
}

/// The todo-list partial: open and done sections with item counts.
pub fn todo_list(open: &[Todo], done: &[Todo]) -> String {
    format!(
        "<div id=\"todo-list\">{}{}</div>",
        section("Open", open),
        section("Done", done),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n{}\n</head>\n<body>\n{}\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body,
        LIST_SCRIPT,
    )
}

fn index_body(open: &[Todo], done: &[Todo]) -> String {
    format!(
        "<h1>Todos</h1>\n\
         <form method=\"post\" action=\"/todos\">\n\
         <input type=\"text\" name=\"todo\" placeholder=\"What needs doing?\" autofocus>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n{}",
        todo_list(open, done),
    )
}

fn section(heading: &str, todos: &[Todo]) -> String {
    let mut out = format!(
        "<section><h2>{} ({})</h2>",
        escape_html(heading),
        todos.len()
    );

    if todos.is_empty() {
        out.push_str("<p class=\"empty\">Nothing here</p>");
    } else {
        out.push_str("<ul>");
        for todo in todos {
            out.push_str(&item(todo));
        }
        out.push_str("</ul>");
    }

    out.push_str("</section>");
    out
}

fn item(todo: &Todo) -> String {
    let (class, toggle_label) = if todo.is_done() {
        ("done", "reopen")
    } else {
        ("open", "done")
    };

    format!(
        "<li class=\"{class}\" data-id=\"{id}\">\
         <span class=\"title\">{title}</span>\
         <button onclick=\"toggleTodo({id})\">{toggle_label}</button>\
         <button onclick=\"deleteTodo({id})\">delete</button>\
         </li>",
        class = class,
        id = todo.id,
        title = escape_html(&todo.title),
        toggle_label = toggle_label,
    )
}

/// Escape text for interpolation into HTML element content or attributes.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn todo(id: i64, title: &str, done: bool) -> Todo {
        let now = Utc::now();
        Todo {
            id,
            title: title.to_string(),
            created_at: now,
            completed_at: done.then_some(now),
        }
    }

    #[test]
    fn test_titles_are_escaped() {
        let todos = vec![todo(1, "<script>alert('x')</script>", false)];

        let html = todo_list(&todos, &[]);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_sections_show_counts_and_empty_state() {
        let open = vec![todo(1, "a", false), todo(2, "b", false)];

        let html = todo_list(&open, &[]);

        assert!(html.contains("Open (2)"));
        assert!(html.contains("Done (0)"));
        assert!(html.contains("Nothing here"));
    }

    #[test]
    fn test_done_items_offer_reopen() {
        let done = vec![todo(7, "shipped", true)];

        let html = todo_list(&[], &done);

        assert!(html.contains("class=\"done\""));
        assert!(html.contains(">reopen</button>"));
        assert!(html.contains("deleteTodo(7)"));
    }

    #[test]
    fn test_index_page_embeds_form_and_partial() {
        let open = vec![todo(1, "first", false)];

        let html = index_page(&open, &[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("action=\"/todos\""));
        assert!(html.contains("id=\"todo-list\""));
        assert!(html.contains("first"));
    }
}
