mod slotlist;
