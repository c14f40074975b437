pub mod complaint_dto;

pub use complaint_dto::{
    AppendHistoryDto, ComplaintFiledDto, ComplaintResponseDto, FileComplaintDto, HistoryEntryDto,
    ListComplaintsQuery, SubmitterDto,
};
