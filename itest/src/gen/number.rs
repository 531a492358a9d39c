# [allow (unused_imports)] use :: gi :: sys :: { AllocKind , ManagedPtr , RawPtr } ; # [allow (unused_imports)] use :: gi :: registry :: { ClassInfo , TypeKind } ; # [allow (unused_imports)] use :: gi :: obj :: { GiClass , StructType } ; # [doc = "Plain union `DemoNumber`, 8 bytes."] # [derive (Clone , Debug)] pub struct Number { managed : ManagedPtr , } impl GiClass for Number { const CLASS_INFO : & 'static ClassInfo = & ClassInfo :: new ("Number" , TypeKind :: Union) ; } impl StructType for Number { const SIZE : usize = 8 ; const ALLOC : AllocKind = AllocKind :: Plain ; fn from_managed (managed : ManagedPtr) -> Self { Self { managed } } fn managed (& self) -> & ManagedPtr { & self . managed } } impl :: gi :: obj :: Construct for Number { type Class = Number ; fn construct_with (interface : & :: gi :: obj :: InterfaceRef , ops : Vec < :: gi :: obj :: AttrOp < Self , :: gi :: obj :: ForNew >> ,) -> Result < Self , :: gi :: meta :: error :: AttrError > { :: gi :: obj :: construct_zeroed (interface , ops) } } # [doc = "Allocates a zero-filled `Number`.\n\n# Panics\nIf the allocator fails."] pub fn new_zero_number () -> Number { :: gi :: obj :: new_zeroed () } # [doc = "Reads `Number.v_int` (`gint`)."] pub fn number_read_v_int (instance : & Number) -> i32 { :: gi :: obj :: read_field (instance , 0) } # [doc = "Writes `Number.v_int`."] pub fn number_write_v_int (instance : & mut Number , value : i32) { :: gi :: obj :: write_field (instance , 0 , value) } # [doc = "Reads `Number.v_int64` (`gint64`)."] pub fn number_read_v_int64 (instance : & Number) -> i64 { :: gi :: obj :: read_field (instance , 0) } # [doc = "Writes `Number.v_int64`."] pub fn number_write_v_int64 (instance : & mut Number , value : i64) { :: gi :: obj :: write_field (instance , 0 , value) } # [doc = "Reads `Number.v_double` (`gdouble`)."] pub fn number_read_v_double (instance : & Number) -> f64 { :: gi :: obj :: read_field (instance , 0) } # [doc = "Writes `Number.v_double`."] pub fn number_write_v_double (instance : & mut Number , value : f64) { :: gi :: obj :: write_field (instance , 0 , value) } # [doc = "Reads `Number.v_pointer` (`gpointer`)."] pub fn number_read_v_pointer (instance : & Number) -> RawPtr { :: gi :: obj :: read_field (instance , 0) } # [doc = "Writes `Number.v_pointer`."] pub fn number_write_v_pointer (instance : & mut Number , value : RawPtr) { :: gi :: obj :: write_field (instance , 0 , value) }