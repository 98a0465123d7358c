mod iter;
mod slotlist;

pub(crate) use {iter::IterChunks, slotlist::FreeSlots};
