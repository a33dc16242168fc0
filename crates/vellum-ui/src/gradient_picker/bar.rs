/// What the gradient bar is doing. Exactly one state is active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GradientBarState {
    #[default]
    Idle,
    /// Pointer hovers the bar; the ghost insert affordance follows it.
    MovingInserter { insert_position: f32 },
    /// The new point's color picker is open.
    InsertingControlPoint { insert_position: f32 },
    /// An existing point is being dragged or edited.
    MovingControlPoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarAction {
    MoveInserter { insert_position: f32 },
    StopInserterMove,
    OpenInserter,
    CloseInserter,
    StartControlChange,
    StopControlChange,
}

impl GradientBarState {
    /// Pure transition function. Pairs not listed leave the state unchanged.
    pub fn reduce(self, action: BarAction) -> GradientBarState {
        use BarAction as A;
        use GradientBarState as S;

        match (self, action) {
            (S::Idle | S::MovingInserter { .. }, A::MoveInserter { insert_position }) => {
                S::MovingInserter { insert_position }
            }
            (S::MovingInserter { .. }, A::StopInserterMove) => S::Idle,
            (S::MovingInserter { insert_position }, A::OpenInserter) => {
                S::InsertingControlPoint { insert_position }
            }
            (S::InsertingControlPoint { .. }, A::CloseInserter) => S::Idle,
            (S::Idle, A::StartControlChange) => S::MovingControlPoint,
            (S::MovingControlPoint, A::StopControlChange) => S::Idle,
            (state, _) => state,
        }
    }

    pub fn is_moving_inserter(self) -> bool {
        matches!(self, GradientBarState::MovingInserter { .. })
    }

    pub fn is_inserting_control_point(self) -> bool {
        matches!(self, GradientBarState::InsertingControlPoint { .. })
    }

    /// Insert position while the inserter is shown or open.
    pub fn insert_position(self) -> Option<f32> {
        match self {
            GradientBarState::MovingInserter { insert_position }
            | GradientBarState::InsertingControlPoint { insert_position } => Some(insert_position),
            _ => None,
        }
    }
}
