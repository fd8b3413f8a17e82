use super::*;

/// Items placed one after another along one axis.
///
/// Each item gets its natural size along the stack, unless it expands.
/// Extra space is left unused when no item expands.
#[derive(Debug, Default)]
pub struct StackLayout {
    pub items: Vec<StackItem>,
    pub padding: Padding,
    /// distance between each
    pub spacing: f64,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug)]
pub struct StackItem {
    pub item: LayoutItem,
    /// Take a share of the space the other items leave.
    pub expand: bool,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl StackItem {
    pub fn new(item: impl Into<LayoutItem>) -> Self {
        Self {
            item: item.into(),
            expand: false,
            horizontal: HorizontalAlignment::Stretch,
            vertical: VerticalAlignment::Stretch,
        }
    }

    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }

    pub fn aligned(
        mut self,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }
}

impl StackLayout {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    pub fn add(&mut self, item: StackItem) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Builds the grid: one track across the stack, and one track per item
    /// along it, with fixed tracks for the gaps.
    pub fn build(self) -> Grid {
        let mut grid = Grid::new();
        grid.set_padding(self.padding);

        let any_expands = self.items.iter().any(|item| item.expand);
        let gap = TableLength::fixed(self.spacing);

        let mut along: Vec<(TableLength, Option<LayoutItem>)> = Vec::new();
        for (index, item) in self.items.into_iter().enumerate() {
            if index > 0 && self.spacing > 0.0 {
                along.push((gap, None));
            }
            let length = if item.expand {
                TableLength::Star(1.0)
            } else {
                TableLength::Auto
            };
            along.push((length, Some(align(item.item, item.horizontal, item.vertical))));
        }
        if !any_expands {
            along.push((TableLength::Star(1.0), None));
        }

        match self.orientation {
            Orientation::Vertical => {
                grid.add_column(TableLength::Star(1.0));
                for (length, item) in along {
                    grid.add_row(length, [item]);
                }
            }
            Orientation::Horizontal => {
                let mut cells = Vec::with_capacity(along.len());
                for (length, item) in along {
                    grid.add_column(length);
                    cells.push(item);
                }
                grid.add_row(TableLength::Star(1.0), cells);
            }
        }
        grid
    }
}
