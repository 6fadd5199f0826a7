//! The todo page served at `/`.

use crate::html::{document, Element};
use alpine_attrs::{
    at_keydown_enter, x_bind_class, x_cloak, x_data, x_for, x_model, x_on_click, x_show, x_text,
    ASSET_PATH,
};

const TODO_DATA: &str = r#"{
    newTodo: '',
    todos: [
        {id: 1, text: 'Learn Alpine.js', completed: false},
        {id: 2, text: 'Build awesome UI', completed: false},
        {id: 3, text: 'Deploy to production', completed: true}
    ],
    nextId: 4,
    addTodo() {
        if (this.newTodo.trim()) {
            this.todos.push({id: this.nextId++, text: this.newTodo.trim(), completed: false});
            this.newTodo = '';
        }
    },
    get completedCount() {
        return this.todos.filter(t => t.completed).length;
    },
    get totalCount() {
        return this.todos.length;
    }
}"#;

const STYLES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; font-family: Inter, system-ui, sans-serif; }
:root { --border: #e5e5e5; --muted: #737373; --primary: #0a0a0a; --radius: 0.5rem; }
[x-cloak] { display: none !important; }
body { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 1rem; line-height: 1.5; }
.container { max-width: 500px; width: 100%; border: 1px solid var(--border); border-radius: var(--radius); padding: 2rem; }
h1 { font-size: 2rem; font-weight: 800; text-align: center; }
.subtitle { color: var(--muted); text-align: center; margin-bottom: 2rem; font-size: 0.875rem; }
.add-todo { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
input[type=text] { flex: 1; padding: 0.5rem 0.75rem; border: 1px solid var(--border); border-radius: calc(var(--radius) - 2px); }
button { padding: 0.5rem 1rem; background: var(--primary); color: #fafafa; border: none; border-radius: calc(var(--radius) - 2px); cursor: pointer; }
button.secondary { background: #f5f5f5; color: var(--primary); border: 1px solid var(--border); padding: 0.25rem 0.5rem; font-size: 0.75rem; }
.todo-list { list-style: none; }
.todo-item { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 0; border-bottom: 1px solid var(--border); }
.todo-text { flex: 1; font-size: 0.875rem; }
.todo-text.completed { text-decoration: line-through; color: var(--muted); }
.empty-state { text-align: center; padding: 3rem 1rem; color: var(--muted); font-size: 0.875rem; }
.stats { margin-top: 1.5rem; padding-top: 1rem; border-top: 1px solid var(--border); display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--muted); }
"#;

/// Render the complete todo page.
pub fn todo_page() -> String {
    document(
        Element::new("html")
            .attr("lang", "en")
            .child(head())
            .child(Element::new("body").child(app())),
    )
}

fn head() -> Element {
    Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text("Todo App"))
        .child(Element::new("script").attr("src", ASSET_PATH).attr("defer", ""))
        .child(Element::new("style").raw(STYLES))
}

fn app() -> Element {
    Element::new("div")
        .class("container")
        .alpine(x_data(TODO_DATA))
        .alpine(x_cloak())
        .child(Element::new("h1").text("Todo App"))
        .child(
            Element::new("p")
                .class("subtitle")
                .text("Stay organized and productive"),
        )
        .child(add_form())
        .child(
            Element::new("div")
                .class("empty-state")
                .alpine(x_show("todos.length === 0"))
                .text("No todos yet. Add one above to get started!"),
        )
        .child(todo_list())
        .child(stats())
}

fn add_form() -> Element {
    Element::new("div")
        .class("add-todo")
        .child(
            Element::new("input")
                .attr("type", "text")
                .attr("placeholder", "Add a new todo...")
                .alpine(x_model("newTodo"))
                .alpine(at_keydown_enter("addTodo()")),
        )
        .child(
            Element::new("button")
                .alpine(x_on_click("addTodo()"))
                .text("Add"),
        )
}

fn todo_list() -> Element {
    let item = Element::new("li")
        .class("todo-item")
        .child(
            Element::new("input")
                .attr("type", "checkbox")
                .alpine(x_model("todo.completed")),
        )
        .child(
            Element::new("span")
                .class("todo-text")
                .alpine(x_bind_class("{'completed': todo.completed}"))
                .alpine(x_text("todo.text")),
        )
        .child(
            Element::new("button")
                .class("secondary")
                .alpine(x_on_click("todos = todos.filter(t => t.id !== todo.id)"))
                .text("Delete"),
        );

    Element::new("ul")
        .class("todo-list")
        .alpine(x_show("todos.length > 0"))
        .child(
            Element::new("template")
                .alpine(x_for("todo in todos"))
                .attr(":key", "todo.id")
                .child(item),
        )
}

fn stats() -> Element {
    Element::new("div")
        .class("stats")
        .alpine(x_show("todos.length > 0"))
        .child(Element::new("span").alpine(x_text("`${completedCount} of ${totalCount} completed`")))
        .child(
            Element::new("button")
                .class("secondary")
                .alpine(x_on_click("todos = todos.filter(t => !t.completed)"))
                .alpine(x_show("completedCount > 0"))
                .text("Clear completed"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_references_embedded_script() {
        let page = todo_page();
        assert!(page.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(page.contains(r#"<script src="/js/alpine.min.js" defer></script>"#));
    }

    #[test]
    fn test_page_uses_alpine_directives() {
        let page = todo_page();
        for fragment in [
            r#"x-model="newTodo""#,
            r#"@keydown.enter="addTodo()""#,
            r#"x-on:click="addTodo()""#,
            r#"x-for="todo in todos""#,
            r#"x-bind:class="{'completed': todo.completed}""#,
            r#"x-show="todos.length === 0""#,
            " x-cloak>",
        ] {
            assert!(page.contains(fragment), "missing {fragment}");
        }
    }

    #[test]
    fn test_expressions_are_escaped_in_markup() {
        let page = todo_page();
        assert!(page.contains(r#"x-on:click="todos = todos.filter(t =&gt; !t.completed)""#));
        assert!(!page.contains("t => !t.completed\""));
    }
}
