//! Command implementations for all quill commands

use crate::cli::{CommentCommands, Commands, PostCommands, UserCommands};
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use quill_core::error::Result;
use quill_core::db::PostEdit;
use quill_core::post::{CommentForm, NewPost, PostStatus};
use quill_core::share::ShareForm;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init => commands::init::execute(ctx.cli, ctx.root),
            Commands::Post { command } => execute_post(ctx, command),
            Commands::List(args) => {
                let site = ctx.discover_or_open_site()?;
                commands::list::execute(
                    ctx.cli,
                    &site,
                    args.tag.as_deref(),
                    args.page.as_deref(),
                )
            }
            Commands::Show(args) => {
                let site = ctx.discover_or_open_site()?;
                commands::show::execute(
                    ctx.cli,
                    &site,
                    args.year,
                    args.month,
                    args.day,
                    &args.slug,
                )
            }
            Commands::Comment { command } => execute_comment(ctx, command),
            Commands::Tags => {
                let site = ctx.discover_or_open_site()?;
                commands::tags::execute(ctx.cli, &site)
            }
            Commands::User { command } => execute_user(ctx, command),
            Commands::Similar(args) => {
                let site = ctx.discover_or_open_site()?;
                commands::similar::execute(ctx.cli, &site, args.id, args.limit)
            }
            Commands::Search(args) => {
                let site = ctx.discover_or_open_site()?;
                commands::search::execute(
                    ctx.cli,
                    &site,
                    args.query.as_deref(),
                    args.raw,
                    args.limit,
                )
            }
            Commands::Share(args) => {
                let site = ctx.discover_or_open_site()?;
                let form = ShareForm {
                    name: args.name.clone(),
                    email: args.email.clone(),
                    to: args.to.clone(),
                    comments: args.comments.clone(),
                };
                commands::share::execute(ctx.cli, &site, args.id, &form)
            }
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}

fn execute_post(ctx: &CommandContext, command: &PostCommands) -> Result<()> {
    let site = ctx.discover_or_open_site()?;
    match command {
        PostCommands::New {
            title,
            author,
            body,
            tag,
            slug,
            publish,
            published,
        } => {
            let mut new_post = NewPost::new(title.as_str(), author.as_str())
                .body(body.as_str())
                .tags(tag.iter().cloned());
            if let Some(slug) = slug {
                new_post = new_post.slug(slug.as_str());
            }
            if let Some(publish) = publish {
                new_post = new_post.publish(*publish);
            }
            if *published {
                new_post = new_post.published();
            }
            commands::post::create(ctx.cli, &site, &new_post)
        }
        PostCommands::Edit {
            id,
            title,
            slug,
            body,
            publish,
        } => {
            let edit = PostEdit {
                title: title.clone(),
                slug: slug.clone(),
                body: body.clone(),
                publish: *publish,
            };
            commands::post::edit(ctx.cli, &site, *id, &edit)
        }
        PostCommands::Publish { id } => {
            commands::post::set_status(ctx.cli, &site, *id, PostStatus::Published)
        }
        PostCommands::Draft { id } => {
            commands::post::set_status(ctx.cli, &site, *id, PostStatus::Draft)
        }
        PostCommands::Tag { id, tags } => commands::post::set_tags(ctx.cli, &site, *id, tags),
        PostCommands::Delete { id } => commands::post::delete(ctx.cli, &site, *id),
    }
}

fn execute_comment(ctx: &CommandContext, command: &CommentCommands) -> Result<()> {
    let site = ctx.discover_or_open_site()?;
    match command {
        CommentCommands::Add {
            post_id,
            name,
            email,
            body,
        } => {
            let form = CommentForm {
                name: name.clone(),
                email: email.clone(),
                body: body.clone(),
            };
            commands::comment::add(ctx.cli, &site, *post_id, &form)
        }
        CommentCommands::List { post_id, all } => {
            commands::comment::list(ctx.cli, &site, *post_id, *all)
        }
        CommentCommands::Hide { id } => commands::comment::set_active(ctx.cli, &site, *id, false),
        CommentCommands::Show { id } => commands::comment::set_active(ctx.cli, &site, *id, true),
    }
}

fn execute_user(ctx: &CommandContext, command: &UserCommands) -> Result<()> {
    let site = ctx.discover_or_open_site()?;
    match command {
        UserCommands::Delete { username } => commands::user::delete(ctx.cli, &site, username),
    }
}
