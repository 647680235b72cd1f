//! Row and filter types mirroring the mock API's tables.

use model::record;

pub const SCHEMA: &str = r#"
    create table categories (
        id text primary key,
        category_name text not null,
        box_art_url text not null default ''
    );

    create table rewards (
        id text primary key,
        broadcaster_id text not null,
        title text not null,
        cost integer not null,
        is_enabled integer not null,
        is_paused integer not null,
        max_per_stream integer
    );

    create table users (
        id text primary key,
        display_name text not null
    );
"#;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub box_art_url: String,
}

record!(Category {
    column id = "id",
    column name = "category_name",
    column box_art_url = "box_art_url".read_only(),
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardLimits {
    pub max_per_stream: Option<i64>,
}

record!(RewardLimits {
    column max_per_stream = "max_per_stream".force(),
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reward {
    pub id: String,
    pub broadcaster_id: String,
    pub title: String,
    pub cost: i64,
    pub enabled: bool,
    pub paused: bool,
    pub limits: RewardLimits,
    pub broadcaster_name: String,
}

record!(Reward {
    column id = "id",
    column broadcaster_id = "broadcaster_id".filter_as("r.broadcaster_id"),
    column title = "title",
    column cost = "cost",
    column enabled = "is_enabled",
    column paused = "is_paused",
    group limits,
    column broadcaster_name = "broadcaster_name".filter_as("u.display_name").read_only(),
});

/// Filter-only view of rewards; `Option` fields match explicit values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardQuery {
    pub enabled: Option<bool>,
    pub paused: Option<bool>,
    pub cost: i64,
}

record!(RewardQuery {
    column enabled = "is_enabled",
    column paused = "is_paused",
    column cost = "cost",
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Owner {
    pub id: String,
}

record!(Owner {
    column id = "broadcaster_id",
});

/// Looks a reward up by its own id and its owner's id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardLookup {
    pub id: String,
    pub owner: Owner,
}

record!(RewardLookup {
    column id = "id",
    group owner,
});
