use catalog::{Descriptor, Entity, Field, Schema};
use clap::Parser;
use common::{Config, OutputFormat};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;
use types::NativeKind;

#[allow(dead_code)]
struct Author {
    id: u64,
    name: String,
    email: String,
    posts: Vec<Post>,
}

impl Entity for Author {
    fn fields() -> Vec<Field> {
        vec![
            Field::of::<u64>("Id", Some("column,primaryKey")),
            Field::of::<String>("Name", Some("column,notNull")),
            Field::of::<String>("Email", Some("column,notNull,unique,index")),
            Field::tagged(
                "Posts",
                NativeKind::list_of(NativeKind::record::<Post>()),
                "oneToMany:author_id",
            ),
        ]
    }
}

#[allow(dead_code)]
struct Post {
    id: u64,
    author_id: u64,
    title: String,
    rating: Option<f32>,
    published: bool,
    author: Box<Author>,
    comments: Vec<Comment>,
}

impl Entity for Post {
    fn fields() -> Vec<Field> {
        vec![
            Field::of::<u64>("Id", Some("column,primaryKey")),
            Field::of::<u64>("AuthorId", Some("column,foreignKey:authors.id")),
            Field::of::<String>("Title", Some("column,notNull")),
            Field::of::<Option<f32>>("Rating", Some("column,check:rating>=0")),
            Field::of::<bool>("Published", Some("column,default:0")),
            Field::tagged(
                "Author",
                NativeKind::pointer_to(NativeKind::record::<Author>()),
                "manyToOne",
            ),
            Field::tagged(
                "Comments",
                NativeKind::list_of(NativeKind::record::<Comment>()),
                "oneToMany:post_id",
            ),
        ]
    }
}

#[allow(dead_code)]
struct Comment {
    id: u64,
    post_id: u64,
    body: String,
    draft: String,
}

impl Entity for Comment {
    fn fields() -> Vec<Field> {
        vec![
            Field::of::<u64>("Id", Some("column,primaryKey")),
            Field::of::<u64>("PostId", Some("column:post,foreignKey:posts.id")),
            Field::of::<String>("Body", Some("column")),
            Field::of::<String>("Draft", None),
        ]
    }

    fn table_name() -> Option<String> {
        Some("post_comments".to_string())
    }
}

fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .init();

    let declarations = [
        Descriptor::of::<Author>(),
        Descriptor::of::<Post>(),
        Descriptor::of::<Comment>(),
    ];

    let schema = match Schema::derive(config.schema_name(), &declarations) {
        Ok(schema) => schema,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    match config.format() {
        OutputFormat::Text => print!("{schema}"),
        OutputFormat::Summary => print!("{}", render_summary(&schema)),
        OutputFormat::Json => match serde_json::to_string_pretty(&schema) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("Failed to serialize schema: {}", err);
                process::exit(1);
            }
        },
    }
}

/// One line per table, followed by its relations and what they resolve to.
fn render_summary(schema: &Schema) -> String {
    let mut out = String::new();
    for table in schema.tables() {
        let primary_key: Vec<_> = table.primary_key().map(|c| c.name()).collect();
        out.push_str(&format!(
            "{:<16} columns={} relations={} primary_key=[{}]\n",
            table.name(),
            table.len(),
            table.relations().len(),
            primary_key.join(", ")
        ));
        for relation in table.relations() {
            match schema.resolve(relation) {
                Ok(target) => {
                    out.push_str(&format!("  {} -> {}\n", relation.field(), target.name()))
                }
                Err(_) => out.push_str(&format!(
                    "  {} -> {} (unresolved)\n",
                    relation.field(),
                    relation.target()
                )),
            }
        }
    }
    out
}
