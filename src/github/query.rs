use std::fmt::{self, Display};

/// Which repositories of the user to list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RepoType {
    All,
    #[default]
    Owner,
    Member,
    /// Sent verbatim, for probing how the API treats unknown values.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Sort {
    Created,
    Updated,
    Pushed,
    #[default]
    FullName,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
    Other(String),
}

impl Display for RepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RepoType::All => "all",
            RepoType::Owner => "owner",
            RepoType::Member => "member",
            RepoType::Other(value) => value,
        };
        f.write_str(value)
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Sort::Created => "created",
            Sort::Updated => "updated",
            Sort::Pushed => "pushed",
            Sort::FullName => "full_name",
            Sort::Other(value) => value,
        };
        f.write_str(value)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
            Direction::Other(value) => value,
        };
        f.write_str(value)
    }
}

impl From<&str> for RepoType {
    fn from(value: &str) -> Self {
        match value {
            "all" => RepoType::All,
            "owner" => RepoType::Owner,
            "member" => RepoType::Member,
            other => RepoType::Other(other.to_owned()),
        }
    }
}

impl From<&str> for Sort {
    fn from(value: &str) -> Self {
        match value {
            "created" => Sort::Created,
            "updated" => Sort::Updated,
            "pushed" => Sort::Pushed,
            "full_name" => Sort::FullName,
            other => Sort::Other(other.to_owned()),
        }
    }
}

impl From<&str> for Direction {
    fn from(value: &str) -> Self {
        match value {
            "asc" => Direction::Asc,
            "desc" => Direction::Desc,
            other => Direction::Other(other.to_owned()),
        }
    }
}
