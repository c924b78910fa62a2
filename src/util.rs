/// Which child link of a node is being talked about. Most tree algorithms come in mirrored pairs
/// (min/max, predecessor/successor) so they're written once against a `Side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
