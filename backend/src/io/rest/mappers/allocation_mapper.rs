use crate::domain::commands::allocations::{CreateAllocationCommand, UpdateAllocationCommand};
use crate::domain::models::allocation::{Allocation as DomainAllocation, AllocationQuery};
use shared::{
    Allocation as SharedAllocation, AllocationFilter, CreateAllocationRequest,
    UpdateAllocationRequest,
};

/// Mapper between the `shared` allocation DTOs and domain types.
pub struct AllocationMapper;

impl AllocationMapper {
    pub fn to_dto(domain: DomainAllocation) -> SharedAllocation {
        SharedAllocation {
            id: domain.id,
            employee_id: domain.employee_id,
            vehicle_id: domain.vehicle_id,
            driver_id: domain.driver_id,
            date: domain.date,
        }
    }

    pub fn to_dto_list(domain: Vec<DomainAllocation>) -> Vec<SharedAllocation> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_create_command(request: CreateAllocationRequest) -> CreateAllocationCommand {
        CreateAllocationCommand {
            employee_id: request.employee_id,
            vehicle_id: request.vehicle_id,
            date: request.date,
        }
    }

    pub fn to_update_command(request: UpdateAllocationRequest) -> UpdateAllocationCommand {
        UpdateAllocationCommand { date: request.date }
    }

    pub fn to_list_query(filter: AllocationFilter) -> AllocationQuery {
        AllocationQuery {
            employee_id: filter.employee_id,
            vehicle_id: filter.vehicle_id,
            date: filter.date,
        }
    }
}
