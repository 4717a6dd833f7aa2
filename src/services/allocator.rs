//! 考场分配服务 - 业务能力层
//!
//! 把打乱后的名单按连续区间切给各个考场。

use tracing::{debug, info};

use crate::error::{AllocationError, AppResult};
use crate::models::{Room, Student};

/// 一个考场的分配结果
#[derive(Debug, Clone, PartialEq)]
pub struct RoomAllocation {
    pub room: Room,
    /// 已按 (Section, ID) 排好序的考生
    pub students: Vec<Student>,
}

impl RoomAllocation {
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// 每个考场的人数
///
/// 每间 `S / R` 人，前 `S % R` 间各多一人。
pub fn room_sizes(total_students: usize, total_rooms: usize) -> AppResult<Vec<usize>> {
    if total_rooms == 0 {
        return Err(AllocationError::NoRooms {
            students: total_students,
        }
        .into());
    }

    let base = total_students / total_rooms;
    let remainder = total_students % total_rooms;
    Ok((0..total_rooms)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect())
}

/// 分配考场
///
/// # 参数
/// - `students`: 已打乱的名单，分配顺序即此顺序
/// - `rooms`: 考场列表，按文件顺序依次分配
///
/// # 返回
/// 每个考场一项，顺序与 `rooms` 相同。考场内部按 (Section, ID) 排序，
/// 排序不影响谁被分到哪个考场。
pub fn allocate(students: &[Student], rooms: &[Room]) -> AppResult<Vec<RoomAllocation>> {
    let sizes = room_sizes(students.len(), rooms.len())?;

    let mut start = 0;
    let allocations: Vec<RoomAllocation> = rooms
        .iter()
        .zip(sizes)
        .map(|(room, size)| {
            let end = start + size;
            let mut slice = students[start..end].to_vec();
            start = end;

            slice.sort_by(Student::display_order);
            debug!("考场 {}: {} 人", room.name, slice.len());

            RoomAllocation {
                room: room.clone(),
                students: slice,
            }
        })
        .collect();

    info!(
        "✓ {} 名学生已分配到 {} 个考场: {:?}",
        students.len(),
        allocations.len(),
        allocations.iter().map(RoomAllocation::len).collect::<Vec<_>>()
    );

    Ok(allocations)
}
