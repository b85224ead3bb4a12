/// How a caller-supplied value relates to the value a project declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Flag and project must agree when both are present.
    Strict,
    /// A flag replaces the project value.
    FlagWins,
}

/// Per-field result of reconciling a flag against project state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled<T> {
    /// Neither side supplied a value.
    Unset,
    /// The caller's value stands.
    Flag(T),
    /// The caller left the field unset; the project's value was adopted.
    Project(T),
    /// Both sides supplied different values under [`Precedence::Strict`].
    Conflict { flag: T, project: T },
}

/// Reconcile a flag with the value declared by the project.
///
/// An explicit flag is never silently replaced, and an unset flag is filled
/// whenever the project can supply it.
pub fn reconcile<T: PartialEq>(
    flag: Option<T>,
    project: Option<T>,
    precedence: Precedence,
) -> Reconciled<T> {
    match (flag, project) {
        (None, None) => Reconciled::Unset,
        (None, Some(project)) => Reconciled::Project(project),
        (Some(flag), None) => Reconciled::Flag(flag),
        (Some(flag), Some(project)) => {
            if precedence == Precedence::Strict && flag != project {
                Reconciled::Conflict { flag, project }
            } else {
                Reconciled::Flag(flag)
            }
        }
    }
}

impl<T> Reconciled<T> {
    /// The effective value, or the conflicting pair as `(flag, project)`.
    pub fn into_value(self) -> Result<Option<T>, (T, T)> {
        match self {
            Reconciled::Unset => Ok(None),
            Reconciled::Flag(v) | Reconciled::Project(v) => Ok(Some(v)),
            Reconciled::Conflict { flag, project } => Err((flag, project)),
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Reconciled::Unset => "unset",
            Reconciled::Flag(_) => "flag",
            Reconciled::Project(_) => "project",
            Reconciled::Conflict { .. } => "conflict",
        }
    }
}
