use crate::transformation::voxelization::{Axis, Occupancy, UniformVoxelGrid, VoxelizationError};

/// An interactive edition of a [`UniformVoxelGrid`].
///
/// Editions never re-run the classification: toggling a voxel only updates its occupancy,
/// its corners in the active-corner set, and the corner activation of its neighbors.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditCommand {
    /// Selects the voxel with the given index.
    Select(usize),
    /// Selects the voxel with the given coordinates.
    SelectAt([u32; 3]),
    /// Moves the selection by one voxel along `axis`, clamped to the grid.
    ///
    /// Selects the first voxel if nothing is selected.
    Step {
        /// The axis to move along.
        axis: Axis,
        /// Whether to move toward `+axis` or `-axis`.
        forward: bool,
    },
    /// Toggles the occupancy of the selected voxel.
    ToggleSelected,
    /// Toggles the occupancy of the voxel with the given index.
    Toggle(usize),
    /// Deselects the selected voxel.
    ClearSelection,
}

impl UniformVoxelGrid {
    /// Applies an edit command to this grid.
    ///
    /// On error, the grid is left unchanged.
    pub fn apply(&mut self, command: EditCommand) -> Result<(), VoxelizationError> {
        log::trace!("Applying {:?}.", command);

        match command {
            EditCommand::Select(index) => self.select(index),
            EditCommand::SelectAt([x, y, z]) => {
                let index = self
                    .voxel_index(x, y, z)
                    .ok_or(VoxelizationError::VoxelOutOfBounds { x, y, z })?;
                self.select(index)
            }
            EditCommand::Step { axis, forward } => self.step_selection(axis, forward),
            EditCommand::ToggleSelected => {
                let index = self.selected.ok_or(VoxelizationError::NoSelection)?;
                self.toggle(index).map(|_| ())
            }
            EditCommand::Toggle(index) => self.toggle(index).map(|_| ()),
            EditCommand::ClearSelection => {
                self.clear_selection();
                Ok(())
            }
        }
    }

    /// Places the edition cursor on the voxel with the given index.
    pub fn select(&mut self, index: usize) -> Result<(), VoxelizationError> {
        if index >= self.voxels.len() {
            return Err(VoxelizationError::VoxelIndexOutOfBounds(index));
        }

        self.clear_selection();
        self.voxels[index].selected = true;
        self.selected = Some(index);
        Ok(())
    }

    /// Removes the edition cursor.
    pub fn clear_selection(&mut self) {
        if let Some(voxel) = self.selected.and_then(|i| self.voxels.get_mut(i)) {
            voxel.selected = false;
        }

        self.selected = None;
    }

    /// Moves the edition cursor by one voxel along `axis`, without leaving the grid.
    ///
    /// Selects the first voxel if nothing is selected.
    pub fn step_selection(&mut self, axis: Axis, forward: bool) -> Result<(), VoxelizationError> {
        let Some(current) = self.selected else {
            return self.select(0);
        };

        let mut offset = [0; 3];
        offset[axis.index()] = if forward { 1 } else { -1 };

        match self.neighbor(current, offset) {
            Some(next) => self.select(next),
            // Clamped to the grid extents.
            None => Ok(()),
        }
    }

    /// Flips the occupancy of the voxel with the given index.
    ///
    /// The corners of the voxel are added to (or removed from) the active-corner set, and
    /// the corner activation of the voxels sharing them is refreshed. Returns the new
    /// occupancy of the voxel.
    pub fn toggle(&mut self, index: usize) -> Result<Occupancy, VoxelizationError> {
        let voxel = self
            .voxels
            .get_mut(index)
            .ok_or(VoxelizationError::VoxelIndexOutOfBounds(index))?;

        voxel.occupancy = voxel.occupancy.toggled();
        let occupancy = voxel.occupancy;
        let aabb = voxel.aabb();

        match occupancy {
            Occupancy::Filled => self.corners.insert_cell(&aabb),
            Occupancy::Empty => self.corners.remove_cell(&aabb),
        }

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(neighbor) = self.neighbor(index, [dx, dy, dz]) {
                        self.refresh_corner_activation(neighbor);
                    }
                }
            }
        }

        Ok(occupancy)
    }
}
